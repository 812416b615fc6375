use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

/// Opens the interval log for appending, creating it if needed.
/// Existing contents are never truncated.
pub fn open_log(path: &Path) -> Result<BufWriter<File>> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    let file = options
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    Ok(BufWriter::new(file))
}
