pub mod error;
pub mod image;

pub use error::{FatWalkError, Result};
pub use image::FilesystemImage;
