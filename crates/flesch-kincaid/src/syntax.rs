//! Tokens from a cloud syntax-analysis service.
//!
//! Models the `DetectSyntax` response shape: a flat list of tokens, each with
//! offsets and a universal part-of-speech tag plus confidence score. Every
//! field is optional on the wire; missing data is tolerated here and decided
//! on by [`UniversalValidator`](crate::validate::UniversalValidator).

use serde::{Deserialize, Serialize};

use crate::error::AnalysisResult;

/// Part-of-speech annotation attached to a [`SyntaxToken`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartOfSpeech {
    /// Raw universal tag code, e.g. `NOUN`.
    #[serde(default)]
    pub tag: Option<String>,
    /// Confidence in the tag, 0--1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

/// One token from a syntax-analysis response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SyntaxToken {
    /// Position of the token in the response, starting at 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<u32>,
    /// Surface text.
    #[serde(default)]
    pub text: String,
    /// Character offset where the token begins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_offset: Option<u32>,
    /// Character offset just past the token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<u32>,
    /// Tag container, absent when the service did not tag the token.
    #[serde(default)]
    pub part_of_speech: Option<PartOfSpeech>,
}

impl SyntaxToken {
    /// Create a token with a tag and no offsets.
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            part_of_speech: Some(PartOfSpeech {
                tag: Some(tag.into()),
                score: None,
            }),
            ..Self::default()
        }
    }

    /// The raw tag string, if both the container and the tag are present.
    pub fn tag(&self) -> Option<&str> {
        self.part_of_speech.as_ref()?.tag.as_deref()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SyntaxResponse {
    #[serde(default)]
    syntax_tokens: Vec<SyntaxToken>,
}

/// Parse a JSON syntax-analysis response into its tokens, in order.
///
/// A response without a `SyntaxTokens` field yields no tokens. Only
/// malformed JSON is an error; unknown tags are kept as-is.
pub fn parse_response(json: &str) -> AnalysisResult<Vec<SyntaxToken>> {
    let response: SyntaxResponse = serde_json::from_str(json)?;
    tracing::debug!(tokens = response.syntax_tokens.len(), "parsed syntax response");
    Ok(response.syntax_tokens)
}
