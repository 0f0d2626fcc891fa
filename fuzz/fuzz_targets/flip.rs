#![no_main]

use std::{num::NonZeroU8, path::Path};

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct StructuredImage {
    width: NonZeroU8,
    height: NonZeroU8,
    rgb_data: Vec<u8>,
}

impl StructuredImage {
    fn to_image(&self) -> image::RgbImage {
        image::ImageBuffer::from_fn(self.width.get() as u32, self.height.get() as u32, |x, y| {
            let idx = (y * self.width.get() as u32 + x) as usize * 3;
            image::Rgb([
                self.rgb_data[idx],
                self.rgb_data[idx + 1],
                self.rgb_data[idx + 2],
            ])
        })
    }

    fn save_as_png(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        self.to_image().save_with_format(path, image::ImageFormat::Png)
    }
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let rgb_data_len = width.get() as usize * height.get() as usize * 3;
        let rgb_data = unstructured.bytes(rgb_data_len)?;

        Ok(Self {
            width,
            height,
            rgb_data: rgb_data.to_vec(),
        })
    }
}

fuzz_target!(|input: StructuredImage| {
    let temp_directory = tempfile::tempdir().expect("failed to create temporary directory");
    let input_path = temp_directory.path().join("input_image.png");
    input
        .save_as_png(&input_path)
        .expect("failed to save image as PNG");

    let (fliph_output_path, _) = fliph_fuzz::flip_and_compare(&temp_directory, &input_path);

    // PNG is lossless, so the mirror must be exact, not just visually close.
    let original = input.to_image();
    let flipped = image::open(&fliph_output_path)
        .expect("could not open the fliph output file")
        .to_rgb8();
    let (width, height) = original.dimensions();
    assert_eq!(flipped.dimensions(), (width, height));
    for y in 0..height {
        for x in 0..width {
            assert_eq!(
                flipped.get_pixel(width - 1 - x, y),
                original.get_pixel(x, y),
                "pixel ({x}, {y}) of {}",
                fliph_output_path.display()
            );
        }
    }
});
