//! Plain-text event formatter that tags each line with the enclosing span.
//!
//! Every `/prompt/generate` round runs inside a `generate` span, so tagging lines with the
//! root span id groups a request's clarity, question and synthesis logs together.

use std::fmt;

use tracing_core::{Event, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

/// Output: `TIMESTAMP LEVEL target: [span=NAME root=ID id=ID] fields` inside a span,
/// `TIMESTAMP LEVEL target: fields` outside one.
pub struct TextWithSpanIds {
    timer: SystemTime,
    with_target: bool,
}

impl Default for TextWithSpanIds {
    fn default() -> Self {
        Self {
            timer: SystemTime,
            with_target: true,
        }
    }
}

impl TextWithSpanIds {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_target(mut self, on: bool) -> Self {
        self.with_target = on;
        self
    }
}

impl<S, N> FormatEvent<S, N> for TextWithSpanIds
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        self.timer.format_time(&mut writer)?;
        write!(writer, " {}", event.metadata().level())?;
        if self.with_target {
            write!(writer, " {}:", event.metadata().target())?;
        }

        if let Some(span) = ctx.parent_span() {
            let id = span.id().into_u64();
            let root = span
                .scope()
                .from_root()
                .next()
                .map(|r| r.id().into_u64())
                .unwrap_or(id);
            write!(writer, " [span={} root={} id={}]", span.name(), root, id)?;
        }

        write!(writer, " ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
