//! Errors raised while reading content files

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a content file could not be turned into a record
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ContentError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ContentError::NotFound(path.to_path_buf())
        } else {
            ContentError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// True when the file simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound(_))
    }
}

/// Collapse a content result into its value or a default.
///
/// Missing files are expected while a site is being filled in and only log at
/// debug level; anything else is a broken file and logs a warning.
pub(crate) fn or_default<T>(result: Result<T, ContentError>, default: impl FnOnce() -> T) -> T {
    match result {
        Ok(value) => value,
        Err(e) if e.is_not_found() => {
            tracing::debug!("{}", e);
            default()
        }
        Err(e) => {
            tracing::warn!("{}, falling back to default", e);
            default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_from_io() {
        let err = ContentError::io(
            Path::new("content/tickets.json"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(err.is_not_found());
        assert!(err.to_string().contains("tickets.json"));
    }

    #[test]
    fn test_or_default_on_parse_error() {
        let source = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let result: Result<Vec<String>, _> = Err(ContentError::Json {
            path: PathBuf::from("faq/it.json"),
            source,
        });
        assert!(or_default(result, Vec::new).is_empty());
    }
}
