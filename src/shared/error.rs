use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts and CI jobs can tell a bad invocation apart from a failed edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The kustomization file was edited (or nothing needed editing)
    Success = 0,
    /// Reading, parsing or writing the kustomization file failed
    ApplicationError = 1,
    /// Invalid command-line arguments (clap usage errors or bad `chart=version` pairs)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned by the application.
    pub fn for_error(err: &anyhow::Error) -> Self {
        if err.downcast_ref::<ChartArgumentError>().is_some() {
            ExitCode::InvalidArguments
        } else {
            ExitCode::ApplicationError
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Errors raised while validating `chart=version` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartArgumentError {
    #[error("no helm chart version specified")]
    NoChartVersions,

    #[error("invalid argument '{argument}', must be chartName=version")]
    MalformedArgument { argument: String },

    #[error("invalid argument '{argument}', chartName and version must not be empty")]
    EmptyField { argument: String },
}

/// Errors raised while indexing or editing kustomization text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("{0}")]
    Syntax(String),

    #[error("top-level document must be a mapping, found {0}")]
    NotAMapping(&'static str),

    #[error("cannot update helm chart '{chart}' at line {line}: {reason}")]
    UnsupportedEntry {
        chart: String,
        line: usize,
        reason: &'static str,
    },
}

/// Errors raised by the filesystem kustomization store.
#[derive(Debug, Error)]
pub enum KustomizationError {
    #[error("No kustomization file found in {dir}\nTried: {tried}\n\n💡 Hint: Run in a directory containing a kustomization file, or specify one with --path")]
    NotFound { dir: PathBuf, tried: String },

    #[error("Invalid directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify the directory containing the kustomization file with --path")]
    InvalidDirectory { path: PathBuf, reason: String },

    #[error("Failed to parse kustomization file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid YAML")]
    ParseError { path: PathBuf, details: String },

    #[error("Invalid kustomization file: {path}\nReason: top-level document must be a mapping, found {found}")]
    NotAMapping { path: PathBuf, found: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },
}
