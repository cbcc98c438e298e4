use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Question;

/// Error loading a question file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: option id {id:?} is used more than once", .path.display())]
    DuplicateOptionId { path: PathBuf, id: String },
}

pub fn load_question_from_json<P: AsRef<Path>>(path: P) -> Result<Question, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let question: Question =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::new();
    for option in &question.options {
        if !seen.insert(option.id.as_str()) {
            return Err(LoadError::DuplicateOptionId {
                path: path.to_path_buf(),
                id: option.id.clone(),
            });
        }
    }

    tracing::info!(
        path = %path.display(),
        options = question.options.len(),
        "loaded question"
    );

    Ok(question)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_question() {
        let file = write_json(
            r#"{
                "text": "Largest planet?",
                "correct_answer": "Jupiter",
                "options": [
                    {"id": "a", "text": "Mars"},
                    {"id": "b", "text": "Jupiter"}
                ]
            }"#,
        );

        let question = load_question_from_json(file.path()).unwrap();
        assert_eq!(question.text, "Largest planet?");
        assert_eq!(question.options.len(), 2);
        assert_eq!(question.options[1].text, "Jupiter");
    }

    #[test]
    fn test_rejects_malformed_json() {
        let file = write_json("{ not json");
        let err = load_question_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_rejects_duplicate_option_ids() {
        let file = write_json(
            r#"{
                "text": "Q?",
                "correct_answer": "A",
                "options": [{"id": "1", "text": "A"}, {"id": "1", "text": "B"}]
            }"#,
        );

        let err = load_question_from_json(file.path()).unwrap_err();
        match err {
            LoadError::DuplicateOptionId { id, .. } => assert_eq!(id, "1"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_question_from_json("/nonexistent/question.json").unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }
}
