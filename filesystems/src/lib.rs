pub mod fat16;
pub mod fat_common;

#[cfg(test)]
pub mod test_helpers;

pub use fat16::{
    walk_image, DirectoryEntry, Geometry, TextReport, TreeEvent, TreeSink, TreeWalker, WalkStats,
};
pub use fat_common::FatAttributes;
