pub mod color;
pub mod error;
pub mod geometry;
pub mod gestures;
pub mod image;
pub mod picker;
pub mod resize;
pub mod tool;

pub use color::*;
pub use geometry::*;
pub use image::*;
pub use picker::*;
pub use resize::*;
pub use tool::*;
