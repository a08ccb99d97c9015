use thiserror::Error;

/// Everything that can go wrong with one submission.
///
/// The first two variants block the submission and are user-correctable.
/// The rest degrade the page to a zeroed result plus an inline error.
/// A malformed score is not an error at all: the normalizer coerces it to 0.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Please upload a resume and paste a job description.")]
    MissingInput,

    #[error("Unsupported resume file '{0}': only PDF or TXT files are allowed.")]
    UnsupportedFileType(String),

    #[error("Backend Error ({status}): {body}")]
    Backend { status: u16, body: String },

    #[error("Error connecting to backend: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("Backend returned an unreadable response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
