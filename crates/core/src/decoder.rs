//! Image decoding facilities.

use std::{io::Cursor, path::Path};

use image::{io::Reader, DynamicImage};

use crate::{Error, PixelSource, Result};

/// Opens and decodes the image file at the given path.
///
/// The container format is detected from the file content, the file
/// extension is only used when the content is not recognized.
pub fn open_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();

    let reader = Reader::open(path)
        .and_then(Reader::with_guessed_format)
        .map_err(|err| Error::open(path, err))?;
    log::debug!("Decoding {:?} as {:?}", path, reader.format());

    let image = reader.decode()?;
    log::debug!(
        "Decoded {} image with {:?} color",
        PixelSource::dimensions(&image),
        image.color()
    );
    Ok(image)
}

/// Decodes an image held in memory.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    let image = Reader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|err| Error::Decode(image::ImageError::IoError(err)))?
        .decode()?;
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_decode_garbage() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_open_missing_file() {
        let err = open_image("/nonexistent/img2bin/input.png").unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
