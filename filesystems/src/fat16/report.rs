// Traversal events and their text rendering

use super::directory::DirectoryEntry;
use crate::fat_common::directory::join_83_name;
use fatwalk_core::Result;
use std::io::Write;

/// Prefix printed in front of volume label entries
pub const VOLUME_LABEL_PREFIX: &str = "DISK NAME: ";

/// One entry seen by the walker, in traversal order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEvent {
    /// Space padded, as stored on disk
    pub name: String,
    pub extension: String,
    pub is_volume_label: bool,
    pub depth: usize,
}

impl TreeEvent {
    pub fn from_entry(entry: &DirectoryEntry, depth: usize) -> Self {
        Self {
            name: String::from_utf8_lossy(&entry.name).into_owned(),
            extension: String::from_utf8_lossy(&entry.extension).into_owned(),
            is_volume_label: entry.is_volume_label(),
            depth,
        }
    }

    pub fn display_name(&self) -> String {
        join_83_name(&self.name, &self.extension)
    }

    /// The line printed for this event, without the trailing newline
    pub fn render(&self) -> String {
        let mut line = String::new();
        if self.is_volume_label {
            line.push_str(VOLUME_LABEL_PREFIX);
        }
        for _ in 0..self.depth {
            line.push('\t');
        }
        line.push_str(&self.display_name());
        line
    }
}

/// Consumer of traversal events
pub trait TreeSink {
    fn entry(&mut self, event: &TreeEvent) -> Result<()>;
}

impl TreeSink for Vec<TreeEvent> {
    fn entry(&mut self, event: &TreeEvent) -> Result<()> {
        self.push(event.clone());
        Ok(())
    }
}

/// Writes the indented tree, one line per entry
pub struct TextReport<W: Write> {
    writer: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush and hand back the writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> TreeSink for TextReport<W> {
    fn entry(&mut self, event: &TreeEvent) -> Result<()> {
        writeln!(self.writer, "{}", event.render())?;
        Ok(())
    }
}
