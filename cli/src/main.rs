use anyhow::Context;
use clap::Parser;
use fatwalk_core::FilesystemImage;
use fatwalk_filesystems::{walk_image, TextReport};
use log::info;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fatwalk")]
#[command(version, about = "Print the directory tree of a FAT16 disk image", long_about = None)]
struct Cli {
    /// Path to the FAT16 image file
    image: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let image = FilesystemImage::load(&cli.image)
        .with_context(|| format!("failed to load image {}", cli.image.display()))?;

    let stdout = io::stdout();
    let mut report = TextReport::new(BufWriter::new(stdout.lock()));
    let result = walk_image(&image, &mut report);

    // Lines written before a failure are still flushed
    report.finish().context("failed to write tree")?;

    let stats = result.with_context(|| format!("failed to walk {}", cli.image.display()))?;
    info!(
        "Walked {} entries in {} subdirectories (max depth {})",
        stats.entries, stats.directories, stats.max_depth
    );

    Ok(())
}
