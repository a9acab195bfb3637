use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The book exists but is checked out, or the borrower already holds a loan.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("store io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<config::ConfigError> for LibraryError {
    fn from(err: config::ConfigError) -> Self {
        LibraryError::validation(
            format!("configuration {}", err).as_str(), Some("config".to_string()))
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::CurrentlyUnavailable { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog and its store.
pub type LibraryResult<T> = Result<T, LibraryError>;

// Field is the closed set of subject categories a book is shelved under.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Field {
    Forensic,
    Law,
    Programming,
    Maths,
    Engineering,
    Nursing,
    Commerce,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Forensic,
        Field::Law,
        Field::Programming,
        Field::Maths,
        Field::Engineering,
        Field::Nursing,
        Field::Commerce,
    ];

    // Case-insensitive comparison against a caller supplied name; unknown names never match.
    pub fn matches(&self, name: &str) -> bool {
        self.to_string().eq_ignore_ascii_case(name.trim())
    }
}

impl FromStr for Field {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL.iter()
            .find(|field| field.matches(s))
            .copied()
            .ok_or_else(|| LibraryError::validation(
                format!("unknown field {:?}", s).as_str(), Some("field".to_string())))
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Field::Forensic => write!(f, "Forensic"),
            Field::Law => write!(f, "Law"),
            Field::Programming => write!(f, "Programming"),
            Field::Maths => write!(f, "Maths"),
            Field::Engineering => write!(f, "Engineering"),
            Field::Nursing => write!(f, "Nursing"),
            Field::Commerce => write!(f, "Commerce"),
        }
    }
}
