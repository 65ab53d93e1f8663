use std::{error::Error, fmt};

#[derive(Debug)]
pub enum ReaderError {
    MissingTitle(String),
    MissingDate(String),
    BadDate(String, chrono::ParseError),
    IoError(std::io::Error),
}

impl std::error::Error for ReaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use ReaderError::*;
        match self {
            BadDate(_, e) => Some(e),
            IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ReaderError::*;
        match self {
            MissingTitle(path) => write!(f, "MissingTitle: {}", path),
            MissingDate(path) => write!(f, "MissingDate: {}", path),
            BadDate(value, e) => write!(f, "BadDate: {}: {}", value, e),
            IoError(e) => write!(f, "IoError: {}", e),
        }
    }
}

impl From<std::io::Error> for ReaderError {
    fn from(error: std::io::Error) -> Self {
        ReaderError::IoError(error)
    }
}

#[derive(Debug)]
pub enum SiteError {
    ContentDirMissing(String),
    EntryError(String, ReaderError),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SiteError::*;
        match self {
            ContentDirMissing(dir) => write!(f, "ContentDirMissing: {}", dir),
            EntryError(path, e) => write!(f, "EntryError: {}: {}", path, crate::unpack_error(e)),
        }
    }
}

impl std::error::Error for SiteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use SiteError::*;
        match self {
            EntryError(_, e) => Some(e),
            _ => None,
        }
    }
}
