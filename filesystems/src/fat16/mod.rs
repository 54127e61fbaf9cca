// FAT16 module - boot sector, directory entries and tree walking

pub mod boot_sector;
pub mod directory;
pub mod report;
pub mod walker;

pub use boot_sector::Geometry;
pub use directory::DirectoryEntry;
pub use report::{TextReport, TreeEvent, TreeSink, VOLUME_LABEL_PREFIX};
pub use walker::{TreeWalker, WalkStats};

use fatwalk_core::{FilesystemImage, Result};

/// Parse the boot sector and walk the whole tree into `sink`.
///
/// Nothing reaches the sink when the boot sector is rejected.
pub fn walk_image(image: &FilesystemImage, sink: &mut dyn TreeSink) -> Result<WalkStats> {
    let geometry = Geometry::parse(image)?;
    TreeWalker::new(image, &geometry).walk(sink)
}
