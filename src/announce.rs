//! Port announcement for the launching process.
//!
//! The desktop app spawns this server as a subprocess and reads the first
//! line of stdout to learn which port was bound. That line is the only
//! machine-readable stdout output the process ever writes; everything else
//! goes to stderr.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::info;

/// The single stdout line identifying the bound port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub port: u16,
}

/// Write the port announcement to stdout and flush it.
///
/// Must be called exactly once, before any other stdout write, so a
/// line-oriented reader can treat the first line as the contract.
pub fn announce_port(port: u16) -> io::Result<()> {
    let line = serde_json::to_string(&ServerInfo { port })?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    stdout.flush()?;

    info!("Announced port {} on stdout", port);
    Ok(())
}
