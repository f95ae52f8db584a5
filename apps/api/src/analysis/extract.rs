use crate::analysis::AnalysisError;

/// Resume text beyond this many characters is not sent to the model.
pub const MAX_RESUME_CHARS: usize = 12_000;

/// Pulls plain text out of an uploaded resume.
///
/// Only PDFs carry an extractable text layer here; Word documents and images are
/// stored but reported as unsupported.
pub fn extract_resume_text(mime: &str, bytes: &[u8]) -> Result<String, AnalysisError> {
    let text = match mime {
        "application/pdf" => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AnalysisError::Extraction(e.to_string()))?,
        other => return Err(AnalysisError::UnsupportedFormat(other.to_string())),
    };

    let normalized = normalize_whitespace(&text);
    if normalized.is_empty() {
        return Err(AnalysisError::NoText);
    }
    Ok(truncate_chars(&normalized, MAX_RESUME_CHARS))
}

/// Collapses runs of blank lines and trailing spaces left by PDF extraction.
fn normalize_whitespace(text: &str) -> String {
    text.lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_are_unsupported() {
        let err = extract_resume_text("image/png", b"\x89PNG").unwrap_err();
        assert!(matches!(err, AnalysisError::UnsupportedFormat(m) if m == "image/png"));
    }

    #[test]
    fn test_word_documents_are_unsupported() {
        let err = extract_resume_text("application/msword", b"doc").unwrap_err();
        assert!(matches!(err, AnalysisError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_normalize_drops_blank_lines() {
        assert_eq!(
            normalize_whitespace("Jane Doe   \n\n\n  \nEngineer\n"),
            "Jane Doe\nEngineer"
        );
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
