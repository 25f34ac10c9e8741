//! STEP file reader: parses ISO 10303-21 text into kernel tables.

use std::path::Path;

use tracing::{debug, warn};
use truck_meshalgo::prelude::*;
use truck_stepio::r#in::{ruststep, Table};

use crate::error::{KernelError, Result};
use crate::explore::{explore_shell, ExploreEvent};
use crate::mesh::{MeshSettings, MeshedModel};

/// A parsed STEP file, before meshing.
///
/// Holds one kernel table per DATA section. Shells are converted to B-rep
/// form on demand, in ascending entity id order so every run walks the
/// faces identically.
#[derive(Debug)]
pub struct StepModel {
    tables: Vec<Table>,
}

impl StepModel {
    /// Read and parse a STEP file.
    ///
    /// The file is read fully into memory and closed before parsing. Bytes
    /// that are not UTF-8 (Latin-1 header strings are common) are replaced
    /// rather than rejected.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| KernelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read STEP file");
        Self::parse(&String::from_utf8_lossy(&bytes))
    }

    /// Parse STEP text already in memory.
    pub fn parse(text: &str) -> Result<Self> {
        let exchange =
            ruststep::parser::parse(text).map_err(|e| KernelError::parse(e.to_string()))?;
        if exchange.data.is_empty() {
            return Err(KernelError::NoData);
        }

        let tables: Vec<Table> = exchange.data.iter().map(Table::from_data_section).collect();
        debug!(
            sections = tables.len(),
            shells = tables.iter().map(|t| t.shell.len()).sum::<usize>(),
            "parsed STEP data"
        );
        Ok(Self { tables })
    }

    /// Number of shell entities across all data sections.
    pub fn num_shells(&self) -> usize {
        self.tables.iter().map(|t| t.shell.len()).sum()
    }

    /// Mesh every shell at the given linear tolerance.
    ///
    /// Shells the kernel cannot convert to B-rep form are skipped.
    pub fn mesh(&self, settings: &MeshSettings) -> Result<MeshedModel> {
        settings.validate()?;
        let tolerance = settings.linear_tolerance;

        let mut shells = Vec::new();
        for table in &self.tables {
            for id in sorted_shell_ids(table) {
                match table.to_compressed_shell(&table.shell[&id]) {
                    Ok(shell) => shells.push(shell.robust_triangulation(tolerance)),
                    Err(e) => warn!(shell = id, "cannot convert shell: {e:?}"),
                }
            }
        }

        debug!(shells = shells.len(), tolerance, "meshed model");
        Ok(MeshedModel::new(shells))
    }

    /// Walk the topology of every shell and record what is found.
    ///
    /// Debug aid only; the event stream has no stable format.
    pub fn explore(&self) -> Vec<ExploreEvent> {
        let mut events = Vec::new();
        let mut ordinal = 0;
        for table in &self.tables {
            for id in sorted_shell_ids(table) {
                match table.to_compressed_shell(&table.shell[&id]) {
                    Ok(shell) => {
                        explore_shell(ordinal, id, &shell, &mut events);
                        ordinal += 1;
                    }
                    Err(e) => warn!(shell = id, "cannot convert shell: {e:?}"),
                }
            }
        }
        events
    }
}

/// Shell entity ids of a table, ascending.
fn sorted_shell_ids(table: &Table) -> Vec<u64> {
    let mut ids: Vec<u64> = table.shell.keys().copied().collect();
    ids.sort_unstable();
    ids
}
