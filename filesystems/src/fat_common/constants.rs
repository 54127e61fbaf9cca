// FAT16 on-disk constants

// Boot sector offsets
pub const BPB_BYTES_PER_SEC: u64 = 0x0B;
pub const BPB_SEC_PER_CLUS: u64 = 0x0D;
pub const BPB_RSVD_SEC_CNT: u64 = 0x0E;
pub const BPB_NUM_FATS: u64 = 0x10;
pub const BPB_ROOT_ENT_CNT: u64 = 0x11;
pub const BPB_FAT_SZ16: u64 = 0x16;
pub const BS16_FIL_SYS_TYPE: u64 = 0x36;

/// Literal expected at `BS16_FIL_SYS_TYPE`
pub const FAT16_SIGNATURE: &[u8; 5] = b"FAT16";

// Directory entries
pub const DIR_ENTRY_SIZE: u64 = 32;
pub const DIR_ENTRY_END: u8 = 0x00;     // No further entries in this directory
pub const DIR_ENTRY_DELETED: u8 = 0xE5; // Deleted entry marker

pub const DOT_NAME: &[u8; 8] = b".       ";
pub const DOTDOT_NAME: &[u8; 8] = b"..      ";

/// Cluster numbering starts at 2; 0 and 1 are reserved
pub const FIRST_DATA_CLUSTER: u16 = 2;
