use std::{ffi::OsStr, io::Write};

use current_platform::CURRENT_PLATFORM;
use image::ImageFormat;

use crate::encode::format_name;

pub fn maybe_print_help_and_exit(bin_name: &str) {
    match std::env::args_os().nth(1) {
        None => print_help_and_exit(bin_name),
        Some(arg) => {
            if arg.as_os_str() == OsStr::new("--help") || arg.as_os_str() == OsStr::new("-help") {
                print_help_and_exit(bin_name)
            }
        }
    }
}

fn print_help_and_exit(bin_name: &str) -> ! {
    let mut stdout = std::io::stdout().lock();
    match print_help(&mut stdout, bin_name) {
        Ok(()) => std::process::exit(0),
        Err(error) => {
            eprintln!("{bin_name}: unable to print help: {error}");
            std::process::exit(1);
        }
    }
}

fn print_help(out: &mut impl Write, bin_name: &str) -> std::io::Result<()> {
    write_help(out, bin_name)?;
    out.flush()
}

pub fn usage(bin_name: &str) -> String {
    format!("Usage: {bin_name} input-file output-file")
}

fn write_help(out: &mut impl Write, bin_name: &str) -> std::io::Result<()> {
    writeln!(out, "Version: {}", version_string())?;
    writeln!(out, "License: {}", env!("CARGO_PKG_LICENSE"))?;
    writeln!(out, "{}", usage(bin_name))?;
    writeln!(out)?;
    writeln!(
        out,
        "Mirrors input-file left-to-right and writes the result to output-file."
    )?;
    writeln!(
        out,
        "The output format is chosen from the extension of output-file."
    )?;
    writeln!(out)?;
    writeln!(out, "Formats:")?;
    for format in ImageFormat::all() {
        let read = if format.reading_enabled() { 'r' } else { '-' };
        let write = if format.writing_enabled() { 'w' } else { '-' };
        if read == '-' && write == '-' {
            continue;
        }
        let extensions = format.extensions_str().join(", ");
        writeln!(out, "  {:10} {read}{write}  {extensions}", format_name(format))?;
    }
    #[cfg(feature = "jxl")]
    writeln!(out, "  {:10} r-  jxl", "JXL")?;
    Ok(())
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    format!("fliph {version} {cpu}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn help_text() -> String {
        let mut out = Vec::new();
        write_help(&mut out, "fliph").unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn help_has_usage_and_version() {
        let text = help_text();
        assert!(text.contains("Usage: fliph input-file output-file"));
        assert!(text.contains(&format!("fliph {}", env!("CARGO_PKG_VERSION"))));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn failed_help_output_is_an_error() {
        let err = print_help(&mut ClosedPipe, "fliph").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }

    #[cfg(all(feature = "png", feature = "jpeg"))]
    #[test]
    fn help_lists_png_and_jpeg_as_readable_and_writable() {
        let text = help_text();
        assert!(text.contains(&format!("  {:10} rw", "PNG")));
        assert!(text.contains(&format!("  {:10} rw", "JPEG")));
    }
}
