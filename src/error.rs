use std::error::Error as StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Path validation failed: {0}")]
    InvalidPath(String),

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed with {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Cannot decode module record from '{command}'")]
    Decode {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}

impl MergeError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        MergeError::Io {
            context: context.into(),
            source,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "termination by signal".to_string(),
    }
}

/// Renders the chain of underlying causes as `cause: cause: ...`.
/// Returns `None` when the error carries no source.
pub fn details(err: &MergeError) -> Option<String> {
    let mut causes = Vec::new();
    let mut current = err.source();
    while let Some(cause) = current {
        causes.push(cause.to_string());
        current = cause.source();
    }

    if causes.is_empty() {
        None
    } else {
        Some(causes.join(": "))
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_walks_source_chain() {
        let err = MergeError::io(
            "Failed to read go.mod",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "Failed to read go.mod");
        assert_eq!(details(&err).as_deref(), Some("no such file"));
    }

    #[test]
    fn details_is_none_without_cause() {
        let err = MergeError::CommandFailed {
            command: "go mod edit".into(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "'go mod edit' failed with exit code 1");
        assert!(details(&err).is_none());
    }
}
