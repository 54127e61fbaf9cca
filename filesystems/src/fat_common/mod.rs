// Building blocks shared by the FAT16 parser and walker

pub mod constants;
pub mod directory;
pub mod timestamps;

pub use constants::*;
pub use directory::*;
pub use timestamps::*;
