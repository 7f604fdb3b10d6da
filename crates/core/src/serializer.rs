//! Headerless raw RGB serialization.
//!
//! Every pixel becomes exactly three bytes in `R, G, B` order. Pixels are
//! emitted row by row starting from the top left corner, so the output of a
//! `width x height` image is always `3 * width * height` bytes long.

use std::io::Write;

use crate::{pixels::PixelSource, Result};

/// Writes the pixels of the given image into the sink.
///
/// Each row is collected into a scratch buffer and handed to the sink with a
/// single `write_all` call. The sink is flushed before returning.
///
/// Returns the total number of bytes written.
pub fn serialize<P, W>(image: &P, mut sink: W) -> Result<u64>
where
    P: PixelSource + ?Sized,
    W: Write,
{
    let (width, height) = (image.width(), image.height());

    let mut row = Vec::with_capacity(width as usize * 3);
    let mut written = 0_u64;
    for y in 0..height {
        row.clear();
        for x in 0..width {
            row.extend_from_slice(&image.rgb_at(x, y));
        }

        sink.write_all(&row)?;
        written += row.len() as u64;
        log::trace!("Serialized row {} of {}", y + 1, height);
    }
    sink.flush()?;

    debug_assert_eq!(written, image.dimensions().raw_len());
    Ok(written)
}

/// Serializes the given image into a freshly allocated buffer.
pub fn to_raw_vec<P>(image: &P) -> Vec<u8>
where
    P: PixelSource + ?Sized,
{
    let mut raw = Vec::with_capacity(image.dimensions().raw_len() as usize);
    for y in 0..image.height() {
        for x in 0..image.width() {
            raw.extend(image.rgb_at(x, y));
        }
    }
    raw
}
