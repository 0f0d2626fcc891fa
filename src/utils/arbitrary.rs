//! Helper functions for using `quickcheck`'s `Arbitrary` trait

use image::{DynamicImage, ImageBuffer, Pixel};
use quickcheck::{Arbitrary, Gen};

/// A small image of any color type `DynamicImage` can hold, filled with random pixels.
#[derive(Debug, Clone)]
pub struct ArbitraryImage(pub DynamicImage);

impl Arbitrary for ArbitraryImage {
    fn arbitrary(gen: &mut Gen) -> Self {
        let width = dimension(gen);
        let height = dimension(gen);
        use DynamicImage::*;
        let pixels = match u8::arbitrary(gen) % 10 {
            0 => ImageLuma8(buffer(width, height, || u8::arbitrary(gen))),
            1 => ImageLumaA8(buffer(width, height, || u8::arbitrary(gen))),
            2 => ImageRgb8(buffer(width, height, || u8::arbitrary(gen))),
            3 => ImageRgba8(buffer(width, height, || u8::arbitrary(gen))),
            4 => ImageLuma16(buffer(width, height, || u16::arbitrary(gen))),
            5 => ImageLumaA16(buffer(width, height, || u16::arbitrary(gen))),
            6 => ImageRgb16(buffer(width, height, || u16::arbitrary(gen))),
            7 => ImageRgba16(buffer(width, height, || u16::arbitrary(gen))),
            8 => ImageRgb32F(buffer(width, height, || finite_f32(gen))),
            _ => ImageRgba32F(buffer(width, height, || finite_f32(gen))),
        };
        Self(pixels)
    }
}

/// Kept small so that quickcheck runs quickly, but never zero.
#[must_use]
pub fn dimension(gen: &mut Gen) -> u32 {
    u32::from(u8::arbitrary(gen) % 16) + 1
}

/// NaN never compares equal to itself, which would break pixel comparisons.
#[must_use]
pub fn finite_f32(gen: &mut Gen) -> f32 {
    let raw = f32::arbitrary(gen);
    if raw.is_infinite() || raw.is_nan() {
        0.0
    } else {
        raw
    }
}

fn buffer<P: Pixel>(
    width: u32,
    height: u32,
    mut subpixel: impl FnMut() -> P::Subpixel,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let len = width as usize * height as usize * P::CHANNEL_COUNT as usize;
    let data: Vec<P::Subpixel> = (0..len).map(|_| subpixel()).collect();
    ImageBuffer::from_raw(width, height, data).expect("buffer length matches dimensions")
}
