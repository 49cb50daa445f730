//! Line-per-record export files

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::Result;

/// Write each record on its own line, replacing any existing file
pub fn export_lines(path: &Path, lines: &[String]) -> Result<()> {
    debug!("Writing {} lines to {}", lines.len(), path.display());
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}
