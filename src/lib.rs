//! Mirror an image left-to-right and write it to a new file.
//!
//! The library half of the `fliph` binary; [`flipper::flip`] is the entry point.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod flipper;
pub mod help;
pub mod image;
pub mod operations;
mod utils;
