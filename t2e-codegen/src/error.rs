use thiserror::Error;

/// Errors raised while rendering an enum into source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("invalid {language} {context} name '{name}': {reason}")]
    InvalidIdentifier {
        language: &'static str,
        context: &'static str,
        name: String,
        reason: String,
    },
}
