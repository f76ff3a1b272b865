//! # Protocol module
//!
//! HTTP request/response bodies for `/prompt/generate`, `/prompt/test`, `/` and `/health`.
//! Field names follow the JSON the web client sends and expects (`additionalInfo`,
//! `needMoreInfo`, `prompt`, `question`).

use serde::{Deserialize, Serialize};

use crate::category::Context;

// -----------------------------------------------------------------------------
// Requests (client → server)
// -----------------------------------------------------------------------------

/// Body of `POST /prompt/generate`.
///
/// Both `additional_info` and `additionalInfo` are accepted; use [`PromptRequest::context`]
/// to get the effective context.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PromptRequest {
    pub keywords: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<Context>,
    #[serde(
        default,
        rename = "additionalInfo",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_info_camel: Option<Context>,
}

impl PromptRequest {
    /// Request with keywords only.
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            ..Self::default()
        }
    }

    /// Sets the context (sent as `additionalInfo`).
    pub fn with_context(mut self, ctx: Context) -> Self {
        self.additional_info_camel = Some(ctx);
        self
    }

    /// Sets the model name hint.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Effective context: `additionalInfo` when given, else `additional_info`, else empty.
    pub fn context(&self) -> Context {
        self.additional_info_camel
            .as_ref()
            .or(self.additional_info.as_ref())
            .cloned()
            .unwrap_or_default()
    }
}

/// Parameters of `POST /prompt/test` (query string or JSON body).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TestPromptRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

// -----------------------------------------------------------------------------
// Responses (server → client)
// -----------------------------------------------------------------------------

/// One finished prompt with a human-readable description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPrompt {
    #[serde(rename = "prompt")]
    pub prompt_text: String,
    pub description: String,
}

impl GeneratedPrompt {
    pub fn new(prompt_text: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            prompt_text: prompt_text.into(),
            description: description.into(),
        }
    }
}

/// Question asked back to the caller to fill one missing category.
///
/// `id` is the category key; `answer` echoes the caller's context value for that key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarifyingQuestion {
    pub id: String,
    #[serde(rename = "question")]
    pub question_text: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Input is ambiguous: the caller should answer `questions` and resend everything.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeedMoreInfoResponse {
    #[serde(rename = "needMoreInfo")]
    need_more_info: bool,
    pub feedback: String,
    pub questions: Vec<ClarifyingQuestion>,
    pub prompts: Vec<GeneratedPrompt>,
}

/// Input is clear: the finished prompts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    #[serde(rename = "needMoreInfo")]
    need_more_info: bool,
    pub prompts: Vec<GeneratedPrompt>,
}

/// Response of `POST /prompt/generate`. Clients branch on `needMoreInfo`.
///
/// Decoding reads the flag first: a body whose fields disagree with it is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, try_from = "WirePromptResponse")]
pub enum PromptResponse {
    NeedMoreInfo(NeedMoreInfoResponse),
    Success(SuccessResponse),
}

/// Flat decode target for [`PromptResponse`].
#[derive(Deserialize)]
struct WirePromptResponse {
    #[serde(rename = "needMoreInfo")]
    need_more_info: bool,
    #[serde(default)]
    feedback: Option<String>,
    #[serde(default)]
    questions: Option<Vec<ClarifyingQuestion>>,
    #[serde(default)]
    prompts: Vec<GeneratedPrompt>,
}

impl TryFrom<WirePromptResponse> for PromptResponse {
    type Error = String;

    fn try_from(w: WirePromptResponse) -> Result<Self, Self::Error> {
        if w.need_more_info {
            let feedback = w.feedback.ok_or("needMoreInfo is true but feedback is missing")?;
            let questions = w
                .questions
                .ok_or("needMoreInfo is true but questions are missing")?;
            if !w.prompts.is_empty() {
                return Err("needMoreInfo is true but prompts is not empty".to_string());
            }
            Ok(PromptResponse::need_more_info(feedback, questions))
        } else {
            if w.feedback.is_some() || w.questions.is_some() {
                return Err(
                    "needMoreInfo is false but feedback or questions are present".to_string(),
                );
            }
            Ok(PromptResponse::success(w.prompts))
        }
    }
}

impl PromptResponse {
    pub fn need_more_info(
        feedback: impl Into<String>,
        questions: Vec<ClarifyingQuestion>,
    ) -> Self {
        PromptResponse::NeedMoreInfo(NeedMoreInfoResponse {
            need_more_info: true,
            feedback: feedback.into(),
            questions,
            prompts: Vec::new(),
        })
    }

    pub fn success(prompts: Vec<GeneratedPrompt>) -> Self {
        PromptResponse::Success(SuccessResponse {
            need_more_info: false,
            prompts,
        })
    }

    /// Value of the `needMoreInfo` flag.
    pub fn is_need_more_info(&self) -> bool {
        matches!(self, PromptResponse::NeedMoreInfo(_))
    }

    pub fn prompts(&self) -> &[GeneratedPrompt] {
        match self {
            PromptResponse::NeedMoreInfo(r) => &r.prompts,
            PromptResponse::Success(r) => &r.prompts,
        }
    }
}

/// Response of `POST /prompt/test`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestPromptResponse {
    pub result: String,
}

/// Error body for 4xx/5xx responses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Response of `GET /`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Response of `GET /health`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_context_wins_over_snake_case() {
        let req: PromptRequest = serde_json::from_str(
            r#"{"keywords":"k","additional_info":{"tone":"dry"},"additionalInfo":{"goal":"teach"}}"#,
        )
        .unwrap();
        let ctx = req.context();
        assert_eq!(ctx.get("goal").map(String::as_str), Some("teach"));
        assert!(ctx.get("tone").is_none());
    }

    #[test]
    fn snake_case_context_used_when_alone() {
        let req: PromptRequest =
            serde_json::from_str(r#"{"keywords":"k","additional_info":{"tone":"dry"}}"#).unwrap();
        assert_eq!(req.context().get("tone").map(String::as_str), Some("dry"));
    }

    #[test]
    fn missing_keywords_is_a_parse_error() {
        let err = serde_json::from_str::<PromptRequest>(r#"{"model":"gpt-4.1"}"#).unwrap_err();
        assert!(err.to_string().contains("keywords"));
    }

    #[test]
    fn need_more_info_serializes_flag_and_empty_prompts() {
        let resp = PromptResponse::need_more_info("more please", vec![]);
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["needMoreInfo"], true);
        assert_eq!(v["feedback"], "more please");
        assert_eq!(v["prompts"], serde_json::json!([]));
        assert_eq!(v["questions"], serde_json::json!([]));
    }

    #[test]
    fn success_parses_back_into_success_variant() {
        let resp = PromptResponse::success(vec![GeneratedPrompt::new("p", "d")]);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"needMoreInfo\":false"));
        assert!(json.contains("\"prompt\":\"p\""));
        let back: PromptResponse = serde_json::from_str(&json).unwrap();
        assert!(!back.is_need_more_info());
        assert_eq!(back, resp);
    }

    #[test]
    fn need_more_info_parses_back_into_need_more_info_variant() {
        let resp = PromptResponse::need_more_info("more please", vec![]);
        let back: PromptResponse =
            serde_json::from_str(&serde_json::to_string(&resp).unwrap()).unwrap();
        assert!(back.is_need_more_info());
        assert_eq!(back, resp);
    }

    #[test]
    fn decoding_follows_flag_not_field_shape() {
        let err = serde_json::from_str::<PromptResponse>(
            r#"{"needMoreInfo":false,"feedback":"x","questions":[],"prompts":[]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("needMoreInfo is false"));

        let err = serde_json::from_str::<PromptResponse>(r#"{"needMoreInfo":true,"prompts":[]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("feedback is missing"));

        let ok: PromptResponse =
            serde_json::from_str(r#"{"needMoreInfo":false,"prompts":[]}"#).unwrap();
        assert!(!ok.is_need_more_info());
    }

    #[test]
    fn question_omits_absent_options_and_explanation() {
        let q = ClarifyingQuestion {
            id: "topic".into(),
            question_text: "What topic?".into(),
            answer: String::new(),
            options: None,
            explanation: None,
        };
        let v = serde_json::to_value(&q).unwrap();
        assert_eq!(v["question"], "What topic?");
        assert!(v.get("options").is_none());
        assert!(v.get("explanation").is_none());
    }
}
