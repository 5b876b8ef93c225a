use thiserror::Error;

/// The central error type for strsafe.
///
/// The string operations themselves are total; errors only arise when parsing
/// character-set patterns, loading configuration, or doing CLI I/O.
#[derive(Error, Debug)]
pub enum StrsafeError {
    #[error("Invalid character set: {0}")]
    CharSet(#[from] CharSetError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CharSetError {
    #[error("Range {start:?}-{end:?} is reversed")]
    ReversedRange { start: char, end: char },

    #[error("Unknown character class '[:{name}:]'")]
    UnknownClass { name: String },

    #[error("Unterminated character class starting at position {position}")]
    UnterminatedClass { position: usize },

    #[error("A character class cannot be a range bound (position {position})")]
    ClassInRange { position: usize },

    #[error("Invalid escape sequence '{sequence}'")]
    InvalidEscape { sequence: String },

    #[error("Pattern ends with a dangling backslash")]
    DanglingEscape,
}

pub type Result<T> = std::result::Result<T, StrsafeError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_CHARSET_ERROR: u8 = 3;
pub const EXIT_IO_ERROR: u8 = 4;

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if let Some(strsafe_err) = e.downcast_ref::<StrsafeError>() {
        return match strsafe_err {
            StrsafeError::Config(_) => EXIT_CONFIG_ERROR,
            StrsafeError::CharSet(_) => EXIT_CHARSET_ERROR,
            StrsafeError::Io(_) => EXIT_IO_ERROR,
            StrsafeError::Other(inner) => get_exit_code(inner),
        };
    }

    // Direct enum unwraps fallback
    if e.downcast_ref::<CharSetError>().is_some() {
        return EXIT_CHARSET_ERROR;
    }
    if e.downcast_ref::<std::io::Error>().is_some() {
        return EXIT_IO_ERROR;
    }

    EXIT_ERROR
}
