use image::{ColorType, DynamicImage, ImageFormat};

#[derive(Debug, Clone)]
pub struct Image {
    /// Format the pixels were decoded from, if `image` knows it by name.
    /// Used as the output format when the output path has no usable extension.
    pub format: Option<ImageFormat>,
    pub pixels: DynamicImage,
}

impl Image {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn color(&self) -> ColorType {
        self.pixels.color()
    }
}
