// FAT16 boot sector (BPB) parsing

use crate::fat_common::constants::*;
use fatwalk_core::{FatWalkError, FilesystemImage, Result};
use log::info;
use std::fmt;

/// On-disk layout derived from the BIOS Parameter Block.
///
/// Built once by [`Geometry::parse`] and passed by reference to the decoder
/// and the walker. All region offsets are absolute byte offsets into the
/// image and are guaranteed to lie within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub bytes_per_sector: u16,
    pub reserved_sectors: u16,
    pub fat_count: u8,
    pub sectors_per_fat: u16,
    pub root_entry_count: u16,
    pub sectors_per_cluster: u8,

    pub fat_region_start: u64,
    pub root_dir_start: u64,
    pub data_region_start: u64,
}

impl Geometry {
    /// Validate the `FAT16` signature and extract the geometry fields.
    pub fn parse(image: &FilesystemImage) -> Result<Self> {
        // A boot sector too short to hold the signature is not FAT16 either
        let start = BS16_FIL_SYS_TYPE as usize;
        let signature = image.as_bytes().get(start..start + FAT16_SIGNATURE.len());
        if signature != Some(&FAT16_SIGNATURE[..]) {
            return Err(FatWalkError::Format(format!(
                "expected {:?} at offset {:#x}, found {:?}",
                String::from_utf8_lossy(FAT16_SIGNATURE),
                BS16_FIL_SYS_TYPE,
                signature.map(String::from_utf8_lossy).unwrap_or_default()
            )));
        }

        let bytes_per_sector = image.read_u16_le(BPB_BYTES_PER_SEC)?;
        let sectors_per_cluster = image.read_u8(BPB_SEC_PER_CLUS)?;
        let reserved_sectors = image.read_u16_le(BPB_RSVD_SEC_CNT)?;
        let fat_count = image.read_u8(BPB_NUM_FATS)?;
        let root_entry_count = image.read_u16_le(BPB_ROOT_ENT_CNT)?;
        let sectors_per_fat = image.read_u16_le(BPB_FAT_SZ16)?;

        // 64-bit arithmetic: the products cannot overflow for 8/16-bit inputs
        let fat_region_start = bytes_per_sector as u64 * reserved_sectors as u64;
        let root_dir_start = fat_region_start
            + sectors_per_fat as u64 * fat_count as u64 * bytes_per_sector as u64;
        let data_region_start = root_dir_start + root_entry_count as u64 * DIR_ENTRY_SIZE;

        let geometry = Self {
            bytes_per_sector,
            reserved_sectors,
            fat_count,
            sectors_per_fat,
            root_entry_count,
            sectors_per_cluster,
            fat_region_start,
            root_dir_start,
            data_region_start,
        };
        geometry.check_bounds(image.len() as u64)?;

        info!("FAT16 geometry: {}", geometry);
        Ok(geometry)
    }

    fn check_bounds(&self, image_len: u64) -> Result<()> {
        let regions = [
            ("FAT region", self.fat_region_start),
            ("root directory", self.root_dir_start),
            ("data region", self.data_region_start),
        ];
        for (region, start) in regions {
            if start > image_len {
                return Err(FatWalkError::OutOfBounds(format!(
                    "{} starts at {:#x}, past the end of a {} byte image",
                    region, start, image_len
                )));
            }
        }
        Ok(())
    }

    pub fn bytes_per_cluster(&self) -> u64 {
        self.sectors_per_cluster as u64 * self.bytes_per_sector as u64
    }

    /// Byte offset of the first byte of `cluster` in the data region.
    pub fn cluster_offset(&self, cluster: u16) -> Result<u64> {
        let index = cluster.checked_sub(FIRST_DATA_CLUSTER).ok_or_else(|| {
            FatWalkError::OutOfBounds(format!(
                "cluster {} lies before the data region (first data cluster is {})",
                cluster, FIRST_DATA_CLUSTER
            ))
        })?;
        Ok(self.data_region_start + self.bytes_per_cluster() * index as u64)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bytes/sector, {} sectors/cluster, {} reserved, {} FATs x {} sectors, \
             {} root entries, FAT @ {:#x}, root @ {:#x}, data @ {:#x}",
            self.bytes_per_sector,
            self.sectors_per_cluster,
            self.reserved_sectors,
            self.fat_count,
            self.sectors_per_fat,
            self.root_entry_count,
            self.fat_region_start,
            self.root_dir_start,
            self.data_region_start
        )
    }
}
