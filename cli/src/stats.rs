// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistent win counters.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use nineboard_core::{Color, WinTally};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TallyData {
    black_wins: u64,
    white_wins: u64,
}

/// Win counters stored as a small JSON file.
///
/// Counters only ever change through [`WinTally::record`]; draws count for
/// nobody. Callers persist with [`FileTally::save`] after recording.
pub struct FileTally {
    path: PathBuf,
    data: TallyData,
}

impl FileTally {
    /// Load counters from `path`; a missing file starts at zero.
    pub fn load(path: &Path) -> Result<Self> {
        let data = match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text)
                .with_context(|| format!("corrupt stats file {}", path.display()))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => TallyData::default(),
            Err(err) => {
                return Err(err).with_context(|| format!("reading stats file {}", path.display()))
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    /// Write the counters back to disk.
    pub fn save(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, text)
            .with_context(|| format!("writing stats file {}", self.path.display()))
    }

    /// Zero the counters and persist immediately.
    pub fn reset(&mut self) -> Result<()> {
        self.data = TallyData::default();
        self.save()
    }
}

impl WinTally for FileTally {
    fn record(&mut self, winner: Option<Color>) {
        match winner {
            Some(Color::Black) => self.data.black_wins += 1,
            Some(Color::White) => self.data.white_wins += 1,
            None => {}
        }
    }

    fn black_wins(&self) -> u64 {
        self.data.black_wins
    }

    fn white_wins(&self) -> u64 {
        self.data.white_wins
    }
}
