// Synthetic FAT16 images for unit tests

use crate::fat16::DirectoryEntry;
use crate::fat_common::directory::FatAttributes;
use fatwalk_core::FilesystemImage;

/// A 512 byte boot sector carrying the given BPB fields and a FAT16 signature
pub fn boot_sector(
    bytes_per_sector: u16,
    reserved_sectors: u16,
    fat_count: u8,
    sectors_per_fat: u16,
    root_entry_count: u16,
    sectors_per_cluster: u8,
) -> Vec<u8> {
    let mut sector = vec![0u8; 512];
    sector[0..3].copy_from_slice(&[0xEB, 0x3C, 0x90]);
    sector[3..11].copy_from_slice(b"FATWALK ");
    sector[0x0B..0x0D].copy_from_slice(&bytes_per_sector.to_le_bytes());
    sector[0x0D] = sectors_per_cluster;
    sector[0x0E..0x10].copy_from_slice(&reserved_sectors.to_le_bytes());
    sector[0x10] = fat_count;
    sector[0x11..0x13].copy_from_slice(&root_entry_count.to_le_bytes());
    sector[0x16..0x18].copy_from_slice(&sectors_per_fat.to_le_bytes());
    sector[0x36..0x3E].copy_from_slice(b"FAT16   ");
    sector[510] = 0x55;
    sector[511] = 0xAA;
    sector
}

fn padded<const N: usize>(text: &str) -> [u8; N] {
    let mut field = [b' '; N];
    let len = text.len().min(N);
    field[..len].copy_from_slice(&text.as_bytes()[..len]);
    field
}

pub fn entry(name: &str, extension: &str, attributes: u8, cluster: u16, size: u32) -> DirectoryEntry {
    DirectoryEntry {
        name: padded(name),
        extension: padded(extension),
        attributes,
        reserved: 0,
        creation_time_seconds: 0,
        creation_time: 0,
        creation_date: 0,
        last_access_date: 0,
        first_cluster_high: 0,
        last_mod_time: 0,
        last_mod_date: 0,
        first_cluster_low: cluster,
        size,
    }
}

pub fn file_entry(name: &str, extension: &str, cluster: u16, size: u32) -> DirectoryEntry {
    entry(name, extension, FatAttributes::ARCHIVE, cluster, size)
}

pub fn dir_entry(name: &str, cluster: u16) -> DirectoryEntry {
    entry(name, "", FatAttributes::DIRECTORY, cluster, 0)
}

/// Lays out boot sector, FATs, root directory and data clusters
pub struct ImageBuilder {
    boot: Vec<u8>,
    bytes_per_sector: u64,
    sectors_per_cluster: u64,
    root_start: u64,
    data_start: u64,
    root_slots: Vec<(usize, DirectoryEntry)>,
    next_root_slot: usize,
    clusters: Vec<(u16, Vec<DirectoryEntry>)>,
}

impl ImageBuilder {
    pub fn new(
        bytes_per_sector: u16,
        reserved_sectors: u16,
        fat_count: u8,
        sectors_per_fat: u16,
        root_entry_count: u16,
        sectors_per_cluster: u8,
    ) -> Self {
        let boot = boot_sector(
            bytes_per_sector,
            reserved_sectors,
            fat_count,
            sectors_per_fat,
            root_entry_count,
            sectors_per_cluster,
        );
        let bps = bytes_per_sector as u64;
        let root_start = bps * reserved_sectors as u64 + bps * sectors_per_fat as u64 * fat_count as u64;
        Self {
            boot,
            bytes_per_sector: bps,
            sectors_per_cluster: sectors_per_cluster as u64,
            root_start,
            data_start: root_start + root_entry_count as u64 * 32,
            root_slots: Vec::new(),
            next_root_slot: 0,
            clusters: Vec::new(),
        }
    }

    /// 1.44MB floppy parameters
    pub fn floppy() -> Self {
        Self::new(512, 1, 2, 9, 224, 1)
    }

    /// Append to the next free root slot
    pub fn root(&mut self, entry: DirectoryEntry) -> &mut Self {
        let slot = self.next_root_slot;
        self.next_root_slot += 1;
        self.set_root_slot(slot, entry)
    }

    pub fn set_root_slot(&mut self, slot: usize, entry: DirectoryEntry) -> &mut Self {
        self.root_slots.push((slot, entry));
        self
    }

    /// Fill the first slots of a data cluster
    pub fn cluster(&mut self, cluster: u16, entries: Vec<DirectoryEntry>) -> &mut Self {
        self.clusters.push((cluster, entries));
        self
    }

    fn cluster_start(&self, cluster: u16) -> usize {
        let cluster_bytes = self.bytes_per_sector * self.sectors_per_cluster;
        (self.data_start + cluster_bytes * (cluster as u64 - 2)) as usize
    }

    pub fn build(&self) -> FilesystemImage {
        let highest = self.clusters.iter().map(|(c, _)| *c).max().unwrap_or(2).max(9);
        let size = self.cluster_start(highest + 1);

        let mut bytes = vec![0u8; size];
        bytes[..self.boot.len()].copy_from_slice(&self.boot);

        for (slot, entry) in &self.root_slots {
            let at = self.root_start as usize + slot * 32;
            bytes[at..at + 32].copy_from_slice(&entry.to_bytes());
        }
        for (cluster, entries) in &self.clusters {
            let start = self.cluster_start(*cluster);
            for (i, entry) in entries.iter().enumerate() {
                let at = start + i * 32;
                bytes[at..at + 32].copy_from_slice(&entry.to_bytes());
            }
        }

        FilesystemImage::from_bytes(bytes)
    }
}
