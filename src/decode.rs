use std::{path::Path, sync::Once};

use image::{ImageFormat, ImageReader};

use crate::{
    error::{ErrorKind, FlipError},
    fl_err, fl_try,
    image::Image,
};

static REGISTER_HOOKS: Once = Once::new();

/// Decoders that live outside of `image` have to be registered with it before the first read.
fn register_decoding_hooks() {
    REGISTER_HOOKS.call_once(|| {
        #[cfg(feature = "jxl")]
        jxl_oxide::integration::register_image_decoding_hook();
    });
}

/// If the format has not been explicitly specified, guesses the format based on file contents.
pub fn decode(file: &Path, format: Option<ImageFormat>) -> Result<Image, FlipError> {
    register_decoding_hooks();
    let mut reader = ImageReader::open(file).map_err(|error| {
        fl_err!(
            ErrorKind::Decode,
            "unable to open image '{}': {error}",
            file.display()
        )
    })?;
    match format {
        Some(format) => reader.set_format(format),
        None => reader = fl_try!(ErrorKind::Decode, reader.with_guessed_format()),
    }
    let format = reader.format();
    let pixels = reader.decode().map_err(|error| {
        fl_err!(
            ErrorKind::Decode,
            "unable to decode image '{}': {error}",
            file.display()
        )
    })?;
    Ok(Image { format, pixels })
}
