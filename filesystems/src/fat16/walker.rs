// Depth-first directory tree traversal

use super::boot_sector::Geometry;
use super::directory::DirectoryEntry;
use super::report::{TreeEvent, TreeSink};
use crate::fat_common::constants::{DIR_ENTRY_END, DIR_ENTRY_SIZE};
use fatwalk_core::{FilesystemImage, Result};
use log::{debug, trace, warn};
use std::collections::HashSet;

/// Summary of a completed walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub entries: usize,
    pub directories: usize,
    pub max_depth: usize,
}

/// A directory being scanned, and the next slot to read in it
#[derive(Debug, Clone, Copy)]
struct Scope {
    start: u64,
    depth: usize,
    slot: u16,
}

impl Scope {
    fn new(start: u64, depth: usize) -> Self {
        Self { start, depth, slot: 0 }
    }
}

/// Walks the directory tree from the root directory region.
///
/// Every scope, root or subdirectory, is scanned for at most
/// `root_entry_count` slots and stops early at a record whose first byte is
/// `0x00`. Only the first cluster of a subdirectory is read; the FAT chain is
/// never followed. Entries are emitted in pre-order: a subdirectory's
/// contents directly follow its own entry, before its later siblings.
///
/// A subdirectory cluster that has already been entered is reported but not
/// descended into again, which keeps corrupt images with cyclic
/// references finite.
pub struct TreeWalker<'a> {
    image: &'a FilesystemImage,
    geometry: &'a Geometry,
}

impl<'a> TreeWalker<'a> {
    pub fn new(image: &'a FilesystemImage, geometry: &'a Geometry) -> Self {
        Self { image, geometry }
    }

    /// Emit every reachable entry to `sink`.
    ///
    /// An `OutOfBounds` error aborts the walk; events already handed to the
    /// sink are not retracted.
    pub fn walk(&self, sink: &mut dyn TreeSink) -> Result<WalkStats> {
        let mut stats = WalkStats::default();
        let mut visited: HashSet<u16> = HashSet::new();
        let mut stack = vec![Scope::new(self.geometry.root_dir_start, 0)];

        'scopes: while let Some(mut scope) = stack.pop() {
            if scope.slot == 0 {
                debug!("Scanning directory at {:#x} (depth {})", scope.start, scope.depth);
                stats.max_depth = stats.max_depth.max(scope.depth);
            }

            while scope.slot < self.geometry.root_entry_count {
                let offset = scope.start + scope.slot as u64 * DIR_ENTRY_SIZE;
                scope.slot += 1;

                if self.image.byte_at(offset)? == DIR_ENTRY_END {
                    break;
                }

                let entry = DirectoryEntry::decode(self.image, offset)?;
                trace!(
                    "{:#x}: {:?} attr={:#04x} cluster={} size={} modified={:?}",
                    offset,
                    entry.display_name(),
                    entry.attributes,
                    entry.first_cluster_low,
                    entry.size,
                    entry.modified()
                );

                sink.entry(&TreeEvent::from_entry(&entry, scope.depth))?;
                stats.entries += 1;

                if !entry.is_subdirectory() || entry.is_dot_entry() {
                    continue;
                }

                let cluster = entry.first_cluster_low;
                if !visited.insert(cluster) {
                    warn!(
                        "Directory {} points to cluster {} which was already walked, not descending",
                        entry.display_name(),
                        cluster
                    );
                    continue;
                }

                let child = self.geometry.cluster_offset(cluster)?;
                debug!(
                    "Descending into {} (cluster {}, offset {:#x})",
                    entry.display_name(),
                    cluster,
                    child
                );
                stats.directories += 1;

                // Resume this scope after the child has been walked
                stack.push(scope);
                stack.push(Scope::new(child, scope.depth + 1));
                continue 'scopes;
            }
        }

        Ok(stats)
    }
}
