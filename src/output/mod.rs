//! Output generation for the slugline command line application

use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Write the finished output to the named file, or to standard output if
/// no file (or `-`) was given.
pub(crate) fn emit(target: Option<&Path>, content: &str) -> std::io::Result<()> {
    match target {
        Some(filename) if filename.to_str() != Some("-") => {
            info!("Writing to file: {}", filename.display());
            let mut file = File::create(filename)?;
            file.write_all(content.as_bytes())?;
            file.flush()
        }
        _ => {
            debug!("Writing {} bytes to stdout", content.len());
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()
        }
    }
}
