//! CSV result file writer

use std::path::Path;

use csv::{Terminator, WriterBuilder};
use log::debug;

use crate::client::Network;
use crate::error::{OutputError, Result};

/// Write one `id,name` row per network to `path`, without a header row.
///
/// The file is created or truncated. An empty slice still leaves an empty
/// file behind. Fields are quoted only when they contain a delimiter, quote or
/// line break.
pub fn write_networks(path: &Path, networks: &[Network]) -> Result<()> {
    let write_err = |reason: String| OutputError::Write {
        path: path.to_path_buf(),
        reason,
    };

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|e| write_err(e.to_string()))?;

    for network in networks {
        writer
            .write_record([network.id.as_str(), network.name.as_str()])
            .map_err(|e| write_err(e.to_string()))?;
    }

    writer.flush().map_err(|e| write_err(e.to_string()))?;
    debug!("Wrote {} rows to {}", networks.len(), path.display());

    Ok(())
}
