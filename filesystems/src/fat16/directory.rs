// FAT16 directory entry (32 bytes) decoding

use crate::fat_common::constants::*;
use crate::fat_common::directory::{join_83_name, trim_padded, FatAttributes};
use crate::fat_common::timestamps::{fat_date, fat_datetime};
use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use chrono::{NaiveDate, NaiveDateTime};
use fatwalk_core::{FilesystemImage, Result};
use std::io::{Cursor, Read};

/// One decoded directory record. Names stay space padded as on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: [u8; 8],             // 0x00
    pub extension: [u8; 3],        // 0x08
    pub attributes: u8,            // 0x0B
    pub reserved: u8,              // 0x0C
    pub creation_time_seconds: u8, // 0x0D
    pub creation_time: u16,        // 0x0E
    pub creation_date: u16,        // 0x10
    pub last_access_date: u16,     // 0x12
    pub first_cluster_high: u16,   // 0x14, always 0 on FAT16
    pub last_mod_time: u16,        // 0x16
    pub last_mod_date: u16,        // 0x18
    pub first_cluster_low: u16,    // 0x1A
    pub size: u32,                 // 0x1C
}

impl DirectoryEntry {
    /// Decode the record at `offset`. The full 32 bytes must be inside the image.
    pub fn decode(image: &FilesystemImage, offset: u64) -> Result<Self> {
        let raw = image.slice(offset, DIR_ENTRY_SIZE as usize)?;
        Ok(Self::from_record(raw)?)
    }

    fn from_record(raw: &[u8]) -> std::io::Result<Self> {
        let mut cursor = Cursor::new(raw);

        let mut name = [0u8; 8];
        cursor.read_exact(&mut name)?;
        let mut extension = [0u8; 3];
        cursor.read_exact(&mut extension)?;

        Ok(Self {
            name,
            extension,
            attributes: cursor.read_u8()?,
            reserved: cursor.read_u8()?,
            creation_time_seconds: cursor.read_u8()?,
            creation_time: cursor.read_u16::<LittleEndian>()?,
            creation_date: cursor.read_u16::<LittleEndian>()?,
            last_access_date: cursor.read_u16::<LittleEndian>()?,
            first_cluster_high: cursor.read_u16::<LittleEndian>()?,
            last_mod_time: cursor.read_u16::<LittleEndian>()?,
            last_mod_date: cursor.read_u16::<LittleEndian>()?,
            first_cluster_low: cursor.read_u16::<LittleEndian>()?,
            size: cursor.read_u32::<LittleEndian>()?,
        })
    }

    /// Encode back into the on-disk layout
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut record = [0u8; 32];
        record[0..8].copy_from_slice(&self.name);
        record[8..11].copy_from_slice(&self.extension);
        record[11] = self.attributes;
        record[12] = self.reserved;
        record[13] = self.creation_time_seconds;
        LittleEndian::write_u16(&mut record[14..16], self.creation_time);
        LittleEndian::write_u16(&mut record[16..18], self.creation_date);
        LittleEndian::write_u16(&mut record[18..20], self.last_access_date);
        LittleEndian::write_u16(&mut record[20..22], self.first_cluster_high);
        LittleEndian::write_u16(&mut record[22..24], self.last_mod_time);
        LittleEndian::write_u16(&mut record[24..26], self.last_mod_date);
        LittleEndian::write_u16(&mut record[26..28], self.first_cluster_low);
        LittleEndian::write_u32(&mut record[28..32], self.size);
        record
    }

    pub fn attributes(&self) -> FatAttributes {
        FatAttributes(self.attributes)
    }

    pub fn is_volume_label(&self) -> bool {
        self.attributes().is_volume_id()
    }

    pub fn is_subdirectory(&self) -> bool {
        self.attributes().is_directory()
    }

    /// `.` or `..`, compared against the canonical padded names
    pub fn is_dot_entry(&self) -> bool {
        &self.name == DOT_NAME || &self.name == DOTDOT_NAME
    }

    /// First byte is the DOS deleted marker. Such entries are still walked.
    pub fn is_deleted(&self) -> bool {
        self.name[0] == DIR_ENTRY_DELETED
    }

    pub fn name_str(&self) -> String {
        trim_padded(&self.name)
    }

    pub fn extension_str(&self) -> String {
        trim_padded(&self.extension)
    }

    /// `NAME.EXT`, or just `NAME` when the extension is blank
    pub fn display_name(&self) -> String {
        join_83_name(&self.name_str(), &self.extension_str())
    }

    pub fn created(&self) -> Option<NaiveDateTime> {
        fat_datetime(self.creation_date, self.creation_time)
    }

    pub fn modified(&self) -> Option<NaiveDateTime> {
        fat_datetime(self.last_mod_date, self.last_mod_time)
    }

    pub fn accessed(&self) -> Option<NaiveDate> {
        fat_date(self.last_access_date)
    }
}
