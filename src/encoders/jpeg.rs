use std::io::Write;

use image::codecs::jpeg::JpegEncoder;

use crate::{
    error::{ErrorKind, FlipError},
    fl_try,
    image::Image,
};

// imagemagick estimates the quality of the input JPEG somehow according to
// https://www.imagemagick.org/script/command-line-options.php#quality
// but we don't do that yet, and 92 is what it uses when the estimate is unavailable
const QUALITY: u8 = 92;

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), FlipError> {
    let encoder = JpegEncoder::new_with_quality(writer, QUALITY);
    // Color types JPEG cannot represent (e.g. 16-bit) are rejected by the encoder.
    // They are not converted: the output must keep the color type of the input.
    fl_try!(ErrorKind::Encode, image.pixels.write_with_encoder(encoder));
    Ok(())
}
