use camino::Utf8PathBuf;

/// Why a dependency source could not produce records.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("command failed: {command}\n{stderr}")]
    ToolFailed { command: String, stderr: String },
    #[error("read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}
