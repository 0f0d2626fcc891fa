use crate::image::Image;
use image::imageops::flip_horizontal_in_place;

/// Mirrors the image left-to-right: column `x` becomes column `width - 1 - x` in every row.
/// Row order, dimensions and color type are left untouched.
pub fn flip_horizontal(image: &mut Image) {
    flip_horizontal_in_place(&mut image.pixels);
}
