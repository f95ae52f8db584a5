use bytes::Bytes;
use serde::Serialize;

use crate::assessment::validation::ValidationError;

const MB: usize = 1024 * 1024;

pub const ALLOWED_RESUME_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/png",
    "image/jpeg",
    "image/webp",
    "image/gif",
];

/// Upload limits for the two submission endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadPolicy {
    /// `submit-with-google-vision`
    Vision,
    /// `submit-with-file`
    Legacy,
}

impl UploadPolicy {
    pub fn max_bytes(&self) -> usize {
        self.max_megabytes() * MB
    }

    pub fn max_megabytes(&self) -> usize {
        match self {
            UploadPolicy::Vision => 15,
            UploadPolicy::Legacy => 5,
        }
    }

    /// Trailing path segment of the submission endpoint.
    pub fn endpoint(&self) -> &'static str {
        match self {
            UploadPolicy::Vision => "submit-with-google-vision",
            UploadPolicy::Legacy => "submit-with-file",
        }
    }
}

/// An uploaded resume held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Bytes,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Lower-cased MIME type without parameters (`"Application/PDF; x=y"` → `"application/pdf"`).
pub fn normalize_mime(mime: &str) -> String {
    mime.split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Checks MIME type and size of a resume against an upload policy.
pub fn validate_resume_file(
    mime: &str,
    size: usize,
    policy: UploadPolicy,
) -> Result<(), ValidationError> {
    let mime = normalize_mime(mime);
    if !ALLOWED_RESUME_MIME_TYPES.contains(&mime.as_str()) {
        return Err(ValidationError::new(
            "Please upload a PDF, Word document, or image file (PNG, JPEG, WebP, GIF)",
        ));
    }
    if size == 0 {
        return Err(ValidationError::new("The selected file is empty"));
    }
    if size > policy.max_bytes() {
        return Err(ValidationError::new(format!(
            "File size exceeds {}MB limit",
            policy.max_megabytes()
        )));
    }
    Ok(())
}

/// Builds a storage-safe file name, keeping only the final path component.
pub fn sanitize_file_name(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('.').to_string();
    if cleaned.is_empty() {
        "resume".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_allowed_type() {
        for mime in ALLOWED_RESUME_MIME_TYPES {
            assert!(validate_resume_file(mime, 1024, UploadPolicy::Legacy).is_ok(), "{mime}");
        }
    }

    #[test]
    fn test_accepts_mime_with_parameters() {
        assert!(validate_resume_file("Application/PDF; charset=binary", 10, UploadPolicy::Vision).is_ok());
    }

    #[test]
    fn test_rejects_disallowed_type() {
        let err = validate_resume_file("text/plain", 1024, UploadPolicy::Vision).unwrap_err();
        assert!(err.message().contains("PDF"));
    }

    #[test]
    fn test_rejects_empty_file() {
        assert!(validate_resume_file("application/pdf", 0, UploadPolicy::Vision).is_err());
    }

    #[test]
    fn test_vision_limit_is_15mb() {
        assert!(validate_resume_file("application/pdf", 15 * MB, UploadPolicy::Vision).is_ok());
        let err = validate_resume_file("application/pdf", 15 * MB + 1, UploadPolicy::Vision).unwrap_err();
        assert_eq!(err.message(), "File size exceeds 15MB limit");
    }

    #[test]
    fn test_legacy_limit_is_5mb() {
        assert!(validate_resume_file("image/png", 5 * MB, UploadPolicy::Legacy).is_ok());
        let err = validate_resume_file("image/png", 6 * MB, UploadPolicy::Legacy).unwrap_err();
        assert_eq!(err.message(), "File size exceeds 5MB limit");
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("C:\\Users\\me\\My CV (final).pdf"), "My_CV__final_.pdf");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name(".."), "resume");
    }
}
