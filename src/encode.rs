use std::{
    ffi::OsStr,
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use image::{ColorType, ImageFormat};
use tempfile::NamedTempFile;

use crate::{
    encoders,
    error::{ErrorKind, FlipError},
    fl_err, fl_try,
    image::Image,
};

/// Writes the image to `path`, returning the format it was encoded in.
///
/// The pixels go to a temporary file next to the destination, which is renamed over it
/// only once everything has been written and flushed. An existing file at `path` is
/// replaced, and is left intact if encoding fails. If `path` is a symlink, the file it
/// points to is replaced instead, and an existing file keeps its permissions.
pub fn encode(image: &Image, path: &Path) -> Result<ImageFormat, FlipError> {
    let format = choose_encoding_format(image, path)?;
    if !format.writing_enabled() {
        return Err(fl_err!(
            ErrorKind::Encode,
            "no encode delegate for this image format `{}'",
            format_name(format)
        ));
    }
    check_color_type_is_kept(format, image.color())?;

    let destination = resolve_destination(path).map_err(|error| {
        fl_err!(
            ErrorKind::Encode,
            "unable to open image '{}': {error}",
            path.display()
        )
    })?;
    let file = temporary_file_next_to(&destination).map_err(|error| {
        fl_err!(
            ErrorKind::Encode,
            "unable to open image '{}': {error}",
            path.display()
        )
    })?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    match format {
        #[cfg(feature = "png")]
        ImageFormat::Png => encoders::png::encode(image, &mut writer)?,
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => encoders::jpeg::encode(image, &mut writer)?,
        _ => fl_try!(ErrorKind::Encode, image.pixels.write_to(&mut writer, format)),
    }

    // Dropping the writer would flush too, but would swallow the error.
    fl_try!(ErrorKind::Encode, writer.flush());
    let file = fl_try!(ErrorKind::Encode, writer.into_inner());
    if let Ok(existing) = fs::metadata(&destination) {
        fl_try!(
            ErrorKind::Encode,
            file.as_file().set_permissions(existing.permissions())
        );
    }
    file.persist(&destination).map_err(|error| {
        fl_err!(
            ErrorKind::Encode,
            "unable to write image '{}': {error}",
            path.display()
        )
    })?;

    Ok(format)
}

fn choose_encoding_format(image: &Image, path: &Path) -> Result<ImageFormat, FlipError> {
    if let Ok(format) = ImageFormat::from_path(path) {
        return Ok(format);
    }
    // if the extension tells us nothing, use the input format (like ImageMagick)
    if let Some(format) = image.format {
        return Ok(format);
    }
    // fallback to empty string matches imagemagick
    let extension = path.extension().unwrap_or(OsStr::new(""));
    Err(fl_err!(
        ErrorKind::Encode,
        "no encode delegate for this image format `{}'",
        extension.to_ascii_uppercase().to_string_lossy()
    ))
}

/// Color types that `format` writes such that decoding the file gives the same color type back.
///
/// Anything not listed is either rejected by the encoder, silently converted by it
/// (GIF and ICO always decode as RGBA), or cannot be read back to check (AVIF).
fn color_types_kept_by(format: ImageFormat) -> &'static [ColorType] {
    use ColorType::*;
    match format {
        ImageFormat::Png => &[L8, La8, Rgb8, Rgba8, L16, La16, Rgb16, Rgba16],
        ImageFormat::Jpeg => &[L8, Rgb8],
        ImageFormat::Gif | ImageFormat::Ico => &[Rgba8],
        ImageFormat::Bmp | ImageFormat::WebP | ImageFormat::Qoi => &[Rgb8, Rgba8],
        ImageFormat::Tga => &[L8, Rgb8, Rgba8],
        ImageFormat::Tiff => &[L8, Rgb8, Rgba8, L16, Rgb16, Rgba16],
        ImageFormat::Pnm => &[L8, Rgb8],
        ImageFormat::Farbfeld => &[Rgba16],
        ImageFormat::OpenExr => &[Rgb32F, Rgba32F],
        ImageFormat::Hdr => &[Rgb32F],
        _ => &[],
    }
}

fn check_color_type_is_kept(format: ImageFormat, color: ColorType) -> Result<(), FlipError> {
    if color_types_kept_by(format).contains(&color) {
        Ok(())
    } else {
        Err(fl_err!(
            ErrorKind::Encode,
            "{} cannot store {color:?} images without converting them",
            format_name(format)
        ))
    }
}

/// Upper-case name of the format, e.g. `PNG` or `JPEG`.
pub fn format_name(format: ImageFormat) -> String {
    format!("{format:?}").to_ascii_uppercase()
}

/// Writing through a symlink replaces the file it points to, not the link.
fn resolve_destination(path: &Path) -> std::io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => fs::canonicalize(path),
        _ => Ok(path.to_path_buf()),
    }
}

/// The temporary file has to live in the destination directory:
/// renaming across filesystems is not atomic and may not be possible at all.
fn temporary_file_next_to(path: &Path) -> std::io::Result<NamedTempFile> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    builder.prefix(".fliph-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // same mode `File::create` uses for new files, so the umask decides
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(directory)
}
