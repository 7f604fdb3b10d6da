//! Conversion of raster images into headerless raw RGB pixel data.

use std::{fs::File, io::BufWriter, path::Path};

pub use errors::{Error, ErrorKind, Result};
pub use pixels::{Dimensions, PixelSource};

pub use self::{
    decoder::{decode_image, open_image},
    serializer::{serialize, to_raw_vec},
};

pub mod decoder;
pub mod errors;
pub mod pixels;
pub mod serializer;

/// Converts the image file into a raw RGB file.
///
/// The input is decoded before the output file is touched, so a broken
/// input never creates an output file. A failure during writing leaves the
/// partially written file in place.
///
/// Returns the dimensions of the converted image, since the raw format has
/// no room for them.
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Dimensions> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let image = open_image(input)?;
    let dimensions = PixelSource::dimensions(&image);
    log::info!("Converting {:?}[{}] into {:?}", input, dimensions, output);

    let mut writer = BufWriter::new(File::create(output)?);
    let written = serialize(&image, &mut writer)?;

    log::info!("Wrote {} bytes into {:?}", written, output);
    Ok(dimensions)
}

/// Decodes the image file and serializes it into memory.
pub fn convert_image_to_raw(path: impl AsRef<Path>) -> Result<(Dimensions, Vec<u8>)> {
    let image = open_image(path)?;
    Ok((PixelSource::dimensions(&image), to_raw_vec(&image)))
}
