//! Path utilities: expand ~, gzip compression for backups.

use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Compress `path` into `path.gz` and return the compressed file's path.
/// The original file is left in place; callers decide whether to remove it.
pub fn compress_backup(path: &Path) -> io::Result<PathBuf> {
    let mut dest = path.as_os_str().to_owned();
    dest.push(".gz");
    let dest = PathBuf::from(dest);

    let mut input = File::open(path)?;
    let output = File::create(&dest)?;
    let mut encoder = GzEncoder::new(output, Compression::default());
    io::copy(&mut input, &mut encoder)?;
    encoder.finish()?;

    Ok(dest)
}
