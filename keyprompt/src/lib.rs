//! # Keyprompt
//!
//! Turns a free-text keyword plus optional structured context into candidate LLM prompts,
//! pausing to ask clarifying questions when the input is ambiguous.
//!
//! Every request is stateless. A client drives a two-phase protocol: while the response has
//! `needMoreInfo = true` it answers the returned questions and resends the keywords with all
//! answers so far; once the input is clear it receives 2–3 finished prompts.
//!
//! ## Main modules
//!
//! - [`clarity`]: [`ClarityEvaluator`], [`ClarityVerdict`]: is the input actionable, and
//!   what is missing.
//! - [`questions`]: [`QuestionGenerator`]: missing categories to [`ClarifyingQuestion`]s.
//! - [`synth`]: [`PromptSynthesizer`]: template families to [`GeneratedPrompt`]s.
//! - [`backend`]: [`PromptBackend`] capability trait and the deterministic [`RuleBasedBackend`].
//! - [`pipeline`]: [`PromptPipeline`]: request in, [`PromptResponse`] out, with fallback.
//! - [`prompts`]: [`PromptCatalog`]: question, feedback and template tables (embedded YAML,
//!   optional directory override).
//! - [`llm`]: [`LlmClient`] and [`SimulatedLlm`] for `POST /prompt/test`.
//! - [`protocol`]: HTTP request/response bodies.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use keyprompt::{PromptPipeline, PromptRequest, PromptResponse};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let pipeline = PromptPipeline::default();
//! match pipeline.generate(&PromptRequest::new("AI")).await {
//!     PromptResponse::NeedMoreInfo(r) => {
//!         for q in r.questions {
//!             println!("{}: {}", q.id, q.question_text);
//!         }
//!     }
//!     PromptResponse::Success(r) => {
//!         for p in r.prompts {
//!             println!("{}", p.prompt_text);
//!         }
//!     }
//! }
//! # }
//! ```

pub mod backend;
pub mod category;
pub mod clarity;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod prompts;
pub mod protocol;
pub mod questions;
pub mod synth;

pub use backend::{PromptBackend, RuleBasedBackend};
pub use category::{Category, Context};
pub use clarity::{ClarityEvaluator, ClarityVerdict};
pub use error::{BackendError, RuleError};
pub use llm::{LlmClient, LlmError, SimulatedLlm};
pub use pipeline::PromptPipeline;
pub use prompts::PromptCatalog;
pub use protocol::{
    ClarifyingQuestion, ErrorBody, GeneratedPrompt, HealthResponse, NeedMoreInfoResponse,
    PromptRequest, PromptResponse, SuccessResponse, TestPromptRequest, TestPromptResponse,
    WelcomeResponse,
};
pub use questions::QuestionGenerator;
pub use synth::PromptSynthesizer;
