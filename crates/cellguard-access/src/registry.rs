//! Cell registry - which room is each person's home cell
//!
//! The registry belongs to a session and is populated once with a complete
//! mapping. Publication swaps an immutable snapshot, so readers see either
//! the whole old mapping or the whole new one.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use cellguard_core::{Person, RoomId};
use parking_lot::RwLock;

/// Person to home cell
pub type CellMap = HashMap<Person, RoomId>;

/// Registry lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// No mapping published yet; every lookup is absent
    Uninitialized,
    /// A mapping has been published
    Initialized,
}

/// Session-owned person to cell mapping
#[derive(Default)]
pub struct CellRegistry {
    cells: RwLock<Option<Arc<CellMap>>>,
}

impl CellRegistry {
    /// Create an uninitialized registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry already holding `cells`
    pub fn with_cells(cells: CellMap) -> Self {
        let registry = Self::new();
        registry.set_cells(cells);
        registry
    }

    /// Replace the whole mapping
    pub fn set_cells(&self, cells: CellMap) {
        let count = cells.len();
        *self.cells.write() = Some(Arc::new(cells));
        tracing::debug!(cells = count, "cell registry published");
    }

    /// Home cell of `person`
    ///
    /// Lookup is by person equality. A standing grant holder never equals a
    /// registered key, so it is looked up under its plain name instead and
    /// resolves to its own cell only.
    pub fn cell_for(&self, person: &Person) -> Option<RoomId> {
        let cells = self.snapshot()?;
        if let Some(cell) = cells.get(person) {
            return Some(*cell);
        }
        if person.is_privileged() {
            return cells.get(&person.named()).copied();
        }
        None
    }

    /// Current mapping, if one has been published
    pub fn snapshot(&self) -> Option<Arc<CellMap>> {
        self.cells.read().clone()
    }

    pub fn state(&self) -> RegistryState {
        if self.cells.read().is_some() {
            RegistryState::Initialized
        } else {
            RegistryState::Uninitialized
        }
    }

    /// Number of registered people
    pub fn len(&self) -> usize {
        self.cells.read().as_ref().map(|cells| cells.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for CellRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellRegistry")
            .field("state", &self.state())
            .field("cells", &self.len())
            .finish()
    }
}
