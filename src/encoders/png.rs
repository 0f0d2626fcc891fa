use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::{
    error::{ErrorKind, FlipError},
    fl_try,
    image::Image,
};

// ImageMagick's default quality of 75 maps to zlib level 7 with adaptive filtering:
// https://www.imagemagick.org/script/command-line-options.php#quality
const COMPRESSION: CompressionType = CompressionType::Level(7);
const FILTER: FilterType = FilterType::Adaptive;

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), FlipError> {
    let encoder = PngEncoder::new_with_quality(writer, COMPRESSION, FILTER);
    // PNG is lossless and the pixels are written in their original color type,
    // so decoding the output yields exactly the mirrored pixels.
    fl_try!(ErrorKind::Encode, image.pixels.write_with_encoder(encoder));
    Ok(())
}
