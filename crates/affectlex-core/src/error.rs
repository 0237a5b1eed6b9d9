use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read {kind} file {path}: {source}")]
    FileIo {
        kind: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {kind} file {path}: {reason}")]
    FileParse {
        kind: &'static str,
        path: String,
        reason: String,
    },

    #[error("lexicon validation failed: {0}")]
    Validation(String),
}
