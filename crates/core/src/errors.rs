use std::io;

use displaydoc::Display;

/// A specialized result type for image conversion.
pub type Result<T> = core::result::Result<T, Error>;

/// Broad classification of conversion failures.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Debug)]
pub enum ErrorKind {
    /// Input cannot be opened or decoded.
    Decode,
    /// Output cannot be created, written or flushed.
    Io,
}

/// Errors that can occur while converting an image into raw pixels.
#[derive(Display, Debug)]
pub enum Error {
    /// Unable to open image {path}: {source}
    Open { path: String, source: io::Error },
    /// Unable to decode image: {0}
    Decode(image::ImageError),
    /// Unable to write raw pixels: {0}
    Io(io::Error),
}

impl Error {
    /// Creates a new error for an input file that cannot be opened.
    pub fn open(path: impl AsRef<std::path::Path>, source: io::Error) -> Self {
        Self::Open {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Open { .. } | Error::Decode(_) => ErrorKind::Decode,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open { source, .. } => Some(source),
            Error::Decode(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Self::Decode(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = Error::open("missing.png", io::ErrorKind::NotFound.into());
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err.to_string().contains("missing.png"));
        assert!(err.source().is_some());

        let err = Error::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
