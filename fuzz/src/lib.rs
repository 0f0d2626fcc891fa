use std::path::{Path, PathBuf};

use tempfile::TempDir;

fn compute_visual_diff(fliph_path: &Path, imagemagick_path: &Path) -> f64 {
    let fliph_image = image::open(fliph_path)
        .expect("could not open the file")
        .to_rgb8();
    let magick_image = image::open(imagemagick_path)
        .expect("could not open the file")
        .to_rgb8();

    let config = dssim::Dssim::new();

    let to_rgb = |image: &image::RgbImage| -> Vec<rgb::RGB<u8>> {
        image
            .pixels()
            .map(|p| rgb::RGB::from([p[0], p[1], p[2]]))
            .collect()
    };

    let fliph_dssim = config
        .create_image_rgb(
            &to_rgb(&fliph_image),
            fliph_image.width() as usize,
            fliph_image.height() as usize,
        )
        .expect("failed to create dssim image from fliph output");
    let magick_dssim = config
        .create_image_rgb(
            &to_rgb(&magick_image),
            magick_image.width() as usize,
            magick_image.height() as usize,
        )
        .expect("failed to create dssim image from ImageMagick output");

    let (dssim_score, _) = config.compare(&fliph_dssim, &magick_dssim);
    dssim_score.into()
}

// Both sides write lossless PNG, so anything above rounding noise is a real difference.
const DSSIM_TOLERANCE: f64 = 0.0001;

/// Flips `input` with fliph and with `convert -flop`, checks the two agree,
/// and returns the paths of both outputs.
pub fn flip_and_compare(directory: &TempDir, input: &Path) -> (PathBuf, PathBuf) {
    use image::GenericImageView as _;

    let fliph_output_path = directory.path().join("fliph_output.png");
    let imagemagick_output_path = directory.path().join("imagemagick_output.png");

    fliph::flipper::flip(input, &fliph_output_path).expect("must have succeeded");

    let magick_status = std::process::Command::new("convert")
        .arg(input)
        .arg("-flop")
        .arg(&imagemagick_output_path)
        .status()
        .expect("must have succeeded");

    if !magick_status.success() {
        panic!("imagemagick command failed");
    }

    let fliph_dimensions = image::open(&fliph_output_path)
        .expect("could not open the fliph output file")
        .dimensions();
    let imagemagick_dimensions = image::open(&imagemagick_output_path)
        .expect("could not open the ImageMagick output file")
        .dimensions();
    assert_eq!(imagemagick_dimensions, fliph_dimensions);

    let dssim_score = compute_visual_diff(&fliph_output_path, &imagemagick_output_path);
    if dssim_score > DSSIM_TOLERANCE {
        panic!("High DSSIM score {dssim_score} for input: {}", input.display());
    }

    (fliph_output_path, imagemagick_output_path)
}
