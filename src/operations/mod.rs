pub mod flip;

pub use flip::flip_horizontal;
