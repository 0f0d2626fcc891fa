//! Formats with dedicated encoders. Everything else goes through `DynamicImage::write_to`.

#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png")]
pub mod png;
