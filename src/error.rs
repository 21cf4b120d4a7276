use reqwest::StatusCode;
use std::error::Error as StdError;
use thiserror::Error;

pub const COMMAND_FAILED: &str = "error: command failed";
pub const UNABLE_TO_PARSE: &str = "error: unable to parse response";
pub const NO_COMPLETION: &str = "error: response did not include a completion";

/// Everything that can go wrong between sending the phrase and printing the answer.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("{}", status_text(.0))]
    Status(StatusCode),

    #[error("{}", error_chain(.0))]
    Transport(#[from] reqwest::Error),

    #[error("unable to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("unable to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("response did not include a completion")]
    MissingCompletion,
}

fn status_text(status: &StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

// reqwest hides the underlying cause (refused connection, DNS failure) behind
// its top-level message, so the whole chain is printed.
fn error_chain(err: &dyn StdError) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

impl QueryError {
    /// The lines printed to stdout for this failure.
    pub fn report(&self) -> Vec<String> {
        match self {
            QueryError::Status(_) | QueryError::Transport(_) => {
                vec![self.to_string(), COMMAND_FAILED.to_string()]
            }
            QueryError::Body(_) | QueryError::Parse(_) => vec![UNABLE_TO_PARSE.to_string()],
            QueryError::MissingCompletion => vec![NO_COMPLETION.to_string()],
        }
    }
}
