//! Resume text extraction — converts an uploaded PDF into plain text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not read PDF: {0}")]
    Unreadable(#[from] pdf_extract::OutputError),

    #[error("document contains no extractable text")]
    NoText,
}

/// Extracts the text of every page, in page order, newline-separated.
///
/// Failure is non-fatal to the pipeline: the caller proceeds with an empty
/// string and surfaces the error as an inline warning, letting the analysis
/// produce a low-confidence result instead of aborting the submission.
pub fn resume_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(bytes)?;
    if text.trim().is_empty() {
        return Err(ExtractError::NoText);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_unreadable() {
        let result = resume_text(b"definitely not a pdf");
        assert!(matches!(result, Err(ExtractError::Unreadable(_))));
    }

    #[test]
    fn test_empty_input_is_unreadable() {
        assert!(resume_text(&[]).is_err());
    }

    #[test]
    fn test_error_messages_are_operator_readable() {
        assert_eq!(
            ExtractError::NoText.to_string(),
            "document contains no extractable text"
        );
        let unreadable = resume_text(b"\x00\x01\x02").unwrap_err();
        assert!(unreadable.to_string().starts_with("could not read PDF"));
    }
}
