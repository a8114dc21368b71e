//! Application errors for the ayush-bridge tools
//!
//! Every [`Error`] carries an [`ErrorCode`] that picks the process exit
//! status, plus optional context and a hint printed under the message.

use ayush_search::{SearchError, SearchErrorCode};
use std::fmt;
use std::io;
use thiserror::Error;

/// Stable numeric error codes, grouped by the thousands digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Output could not be produced
    Internal = 1000,

    // File access (2xxx)
    /// Unclassified I/O failure
    IoError = 2000,
    /// Input file missing
    FileNotFound = 2001,
    /// Input file not readable
    PermissionDenied = 2002,

    // Configuration (3xxx)
    /// Configuration file unreadable
    ConfigError = 3000,
    /// Explicit configuration path does not exist
    ConfigNotFound = 3001,
    /// Configuration is not valid TOML for the schema
    ConfigParseError = 3002,
    /// A configured value is out of range
    ConfigValidationError = 3003,

    // Command-line input (6xxx)
    /// A flag value is out of range
    ValidationError = 6000,

    // Corpus (9xxx)
    /// Corpus file unreadable
    CorpusError = 9000,
    /// Corpus file does not exist
    CorpusNotFound = 9001,
    /// Corpus file is not a JSON array of diagnoses
    CorpusParseError = 9002,
    /// Corpus holds no usable records
    EmptyCorpus = 9003,
}

impl ErrorCode {
    /// Numeric value of the code
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Process exit status for failures with this code
    pub fn exit_code(self) -> i32 {
        use ErrorCode::*;
        match self {
            ConfigError | ConfigNotFound | ConfigParseError | ConfigValidationError => {
                exit_codes::CONFIG_ERROR
            }
            ValidationError => exit_codes::VALIDATION_ERROR,
            CorpusError | CorpusNotFound | CorpusParseError | EmptyCorpus => exit_codes::CORPUS_ERROR,
            Internal | IoError | FileNotFound | PermissionDenied => exit_codes::FAILURE,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// An error reported to the user
#[derive(Error, Debug)]
pub struct Error {
    /// What went wrong, as a code
    pub code: ErrorCode,
    /// What went wrong, in words
    pub message: String,
    /// Where it happened
    pub context: Option<String>,
    /// What the user can do about it
    pub suggestion: Option<String>,
    /// Underlying cause
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(context) = &self.context {
            write!(f, " ({context})")?;
        }
        Ok(())
    }
}

impl Error {
    /// Error with a code and message only
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Say where the error happened
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Attach a hint for the user
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Keep the underlying cause
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// An explicitly requested configuration file is missing
    pub fn config_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create an .ayush-bridge.toml file or use --config to specify a path")
    }

    /// A configured value is out of range
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigValidationError, message)
    }

    /// A command-line value is out of range
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// The corpus loaded but nothing survived cleaning
    pub fn empty_corpus(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::EmptyCorpus,
            format!("Corpus has no usable records: {}", path.as_ref().display()),
        )
        .with_suggestion(CORPUS_SHAPE_HINT)
    }
}

const CORPUS_SHAPE_HINT: &str =
    "Check that the file holds a JSON array of {term, namaste_code, icd_code} objects";

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
pub mod exit_codes {
    /// Command completed
    pub const SUCCESS: i32 = 0;
    /// Unclassified failure
    pub const FAILURE: i32 = 1;
    /// Bad command-line input
    pub const VALIDATION_ERROR: i32 = 2;
    /// Configuration could not be loaded or is invalid
    pub const CONFIG_ERROR: i32 = 3;
    /// Corpus missing, unreadable or empty
    pub const CORPUS_ERROR: i32 = 4;
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        let code = match err.kind() {
            io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Self::new(code, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorCode::Internal, format!("Could not write JSON output: {err}")).with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::new(ErrorCode::ConfigParseError, err.message().to_string()).with_source(err)
    }
}

impl From<SearchError> for Error {
    fn from(err: SearchError) -> Self {
        let (code, hint) = match err.code() {
            SearchErrorCode::CorpusNotFound => (
                ErrorCode::CorpusNotFound,
                Some("Pass --corpus <path> or set AYUSH_CORPUS"),
            ),
            SearchErrorCode::CorpusParse => (ErrorCode::CorpusParseError, Some(CORPUS_SHAPE_HINT)),
            SearchErrorCode::CorpusIo => (ErrorCode::CorpusError, None),
        };

        let error = Self::new(code, err.to_string());
        let error = match hint {
            Some(hint) => error.with_suggestion(hint),
            None => error,
        };
        error.with_source(err)
    }
}

/// Adds context to a failed [`Result`]
pub trait ResultExt<T> {
    /// Say where the error happened
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_code_display() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::CorpusNotFound.to_string(), "E9001");
        assert_eq!(ErrorCode::Internal.to_string(), "E1000");
    }

    #[test]
    fn test_exit_codes_by_group() {
        assert_eq!(ErrorCode::ConfigValidationError.exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(ErrorCode::ValidationError.exit_code(), exit_codes::VALIDATION_ERROR);
        assert_eq!(ErrorCode::EmptyCorpus.exit_code(), exit_codes::CORPUS_ERROR);
        assert_eq!(ErrorCode::Internal.exit_code(), exit_codes::FAILURE);
        assert_eq!(ErrorCode::FileNotFound.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn test_display_includes_context_not_hint() {
        let err = Error::empty_corpus("diagnoses.json").with_context("While checking");
        assert_eq!(
            err.to_string(),
            "E9003: Corpus has no usable records: diagnoses.json (While checking)"
        );
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::validation("--limit must be at least 1"));
        let err = result.context("Parsing flags").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("Parsing flags"));
    }

    #[test]
    fn test_io_error_kinds() {
        let missing: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(missing.code, ErrorCode::FileNotFound);

        let other: Error = io::Error::other("broken pipe").into();
        assert_eq!(other.code, ErrorCode::IoError);
    }

    #[test]
    fn test_search_error_mapping_follows_search_codes() {
        let missing: Error = SearchError::CorpusNotFound(PathBuf::from("diagnoses.json")).into();
        assert_eq!(missing.code, ErrorCode::CorpusNotFound);
        assert!(missing.message.contains("diagnoses.json"));
        assert!(missing.suggestion.as_deref().unwrap_or("").contains("--corpus"));
        assert!(missing.source.is_some());

        let bad_json = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let parse: Error = SearchError::Json(bad_json).into();
        assert_eq!(parse.code, ErrorCode::CorpusParseError);
        assert_eq!(parse.code.exit_code(), exit_codes::CORPUS_ERROR);

        let io: Error = SearchError::Io(io::Error::other("disk")).into();
        assert_eq!(io.code, ErrorCode::CorpusError);
        assert!(io.suggestion.is_none());
    }
}
