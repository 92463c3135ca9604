use crate::errors::{AppError, AppResult};
use crate::models::FileMeta;
use uuid::Uuid;

pub const MAX_FILES: usize = 5;
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Gate for incoming attachment metadata. The collections only ever hold
/// records that passed this check; file bytes are never read or retained.
pub fn accept_attachment(
    existing: &[FileMeta],
    name: &str,
    size: u64,
    mime_type: &str,
) -> AppResult<FileMeta> {
    if size > MAX_FILE_SIZE {
        return Err(AppError::Attachment(format!(
            "file too large: {name} ({size} bytes)"
        )));
    }
    if existing.len() >= MAX_FILES {
        return Err(AppError::Attachment(format!(
            "at most {MAX_FILES} attachments are allowed"
        )));
    }
    Ok(FileMeta {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        size,
        mime_type: mime_type.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_small_file_and_assigns_an_id() {
        let meta = accept_attachment(&[], "quote.pdf", 1024, "application/pdf").unwrap();
        assert!(!meta.id.is_empty());
        assert_eq!(meta.name, "quote.pdf");
        assert_eq!(meta.size, 1024);
        assert_eq!(meta.mime_type, "application/pdf");
    }

    #[test]
    fn rejects_oversized_files() {
        let result = accept_attachment(&[], "huge.bin", MAX_FILE_SIZE + 1, "application/octet-stream");
        assert!(matches!(result, Err(AppError::Attachment(_))));
    }

    #[test]
    fn rejects_more_than_the_allowed_number_of_files() {
        let mut existing = Vec::new();
        for index in 0..MAX_FILES {
            existing.push(
                accept_attachment(&existing, &format!("f{index}.txt"), 10, "text/plain").unwrap(),
            );
        }
        let result = accept_attachment(&existing, "one-too-many.txt", 10, "text/plain");
        assert!(matches!(result, Err(AppError::Attachment(_))));
    }
}
