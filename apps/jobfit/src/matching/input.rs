//! Pulls the resume file and job description out of a
//! multipart form and checks both are present before anything leaves the process.

use std::path::Path;

use axum::extract::multipart::{Multipart, MultipartError};
use bytes::Bytes;
use mime_guess::Mime;

use crate::matching::error::MatchError;

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

const OCTET_STREAM: &str = "application/octet-stream";

/// The two resume formats the matcher accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeKind {
    Pdf,
    PlainText,
}

impl ResumeKind {
    /// Classifies by extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = Path::new(file_name).extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(ResumeKind::Pdf),
            "txt" => Some(ResumeKind::PlainText),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl ResumeUpload {
    /// Keeps the browser-declared MIME type when it is usable, otherwise guesses from the name.
    pub fn new(file_name: impl Into<String>, declared: Option<&str>, bytes: Bytes) -> Self {
        let file_name = file_name.into();
        let content_type = declared
            .map(str::trim)
            .filter(|ct| {
                ct.parse::<Mime>()
                    .is_ok_and(|m| m.essence_str() != OCTET_STREAM)
            })
            .map(str::to_string)
            .unwrap_or_else(|| {
                mime_guess::from_path(&file_name)
                    .first_or_octet_stream()
                    .essence_str()
                    .to_string()
            });

        Self {
            file_name,
            content_type,
            bytes,
        }
    }
}

/// Raw form state, before validation. Holds at most one file.
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub resume: Option<ResumeUpload>,
    pub job_description: String,
}

/// A validated `(resume, job description)` pair, ready to send.
#[derive(Debug, Clone)]
pub struct Submission {
    pub resume: ResumeUpload,
    pub kind: ResumeKind,
    pub job_description: String,
}

impl SubmissionForm {
    /// Reads the `resume` and `job_description` fields; other fields are ignored.
    ///
    /// An empty file input (no name, no bytes) leaves `resume` untouched.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = SubmissionForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some(RESUME_FIELD) => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let declared = field.content_type().map(str::to_owned);
                    let bytes = field.bytes().await?;
                    if !file_name.is_empty() || !bytes.is_empty() {
                        form.resume =
                            Some(ResumeUpload::new(file_name, declared.as_deref(), bytes));
                    }
                }
                Some(JOB_DESCRIPTION_FIELD) => {
                    form.job_description = field.text().await?;
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Fails with `MissingInput` when the file is absent or empty, or the
    /// description is blank. The description is forwarded untrimmed.
    pub fn validate(self) -> Result<Submission, MatchError> {
        let resume = self
            .resume
            .filter(|r| !r.bytes.is_empty())
            .ok_or(MatchError::MissingInput)?;

        if self.job_description.trim().is_empty() {
            return Err(MatchError::MissingInput);
        }

        let kind = ResumeKind::from_file_name(&resume.file_name)
            .ok_or_else(|| MatchError::UnsupportedFileType(resume.file_name.clone()))?;

        Ok(Submission {
            resume,
            kind,
            job_description: self.job_description,
        })
    }
}
