//! External ICNS packaging.

use camino::Utf8Path;
use std::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum PackagerError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {}: {stderr}", status_text(.code))]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
    #[error("{program} reported success but wrote no file at {path}")]
    MissingOutput { program: String, path: String },
}

fn status_text(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

/// Bundles an iconset directory into a single container file.
pub trait IconPackager {
    fn package(&self, iconset: &Utf8Path, out: &Utf8Path) -> Result<(), PackagerError>;
}

/// macOS `iconutil -c icns <iconset> -o <out>`, or a compatible program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Iconutil {
    program: String,
}

impl Iconutil {
    pub const DEFAULT_PROGRAM: &'static str = "iconutil";

    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for Iconutil {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

impl IconPackager for Iconutil {
    fn package(&self, iconset: &Utf8Path, out: &Utf8Path) -> Result<(), PackagerError> {
        tracing::debug!(program = %self.program, %iconset, %out, "packaging iconset");

        let output = Command::new(&self.program)
            .args(["-c", "icns", iconset.as_str(), "-o", out.as_str()])
            .output()
            .map_err(|source| PackagerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(PackagerError::Failed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if !out.is_file() {
            return Err(PackagerError::MissingOutput {
                program: self.program.clone(),
                path: out.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let err = Iconutil::new("distkit-no-such-packager")
            .package(&root.join("icon.iconset"), &root.join("icon.icns"))
            .unwrap_err();
        assert!(matches!(err, PackagerError::Spawn { .. }), "{err:?}");
        assert!(err.to_string().contains("distkit-no-such-packager"));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported_with_status() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let err = Iconutil::new("false")
            .package(&root.join("icon.iconset"), &root.join("icon.icns"))
            .unwrap_err();
        match err {
            PackagerError::Failed { code, .. } => assert_eq!(code, Some(1)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn success_without_output_file_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let err = Iconutil::new("true")
            .package(&root.join("icon.iconset"), &root.join("icon.icns"))
            .unwrap_err();
        assert!(matches!(err, PackagerError::MissingOutput { .. }), "{err:?}");
    }

    #[test]
    fn default_program_is_iconutil() {
        assert_eq!(Iconutil::default().program(), "iconutil");
    }
}
