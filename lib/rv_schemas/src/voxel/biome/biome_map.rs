//! World biome map implementation

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::BiomeEntry;
use crate::coordinates::{CellPos, ColumnPos};

/// The per-world map of biome cell assignments.
///
/// Cells are assigned exactly once: [`BiomeMap::assign`] keeps the first write and ignores any
/// later ones, so repeated population passes are side-effect-free.
#[derive(Clone, Serialize, Deserialize)]
pub struct BiomeMap {
    cell_size: i32,
    cells: HashMap<CellPos, BiomeEntry>,
}

impl BiomeMap {
    /// Creates an empty map with the given cell side length, in columns.
    pub fn new(cell_size: i32) -> Self {
        assert!(cell_size > 0, "biome cells must have a positive size");
        Self {
            cell_size,
            cells: HashMap::new(),
        }
    }

    /// The cell side length, in columns.
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// The cell owning the given column.
    pub fn cell_of(&self, col: ColumnPos) -> CellPos {
        CellPos::from_column(col, self.cell_size)
    }

    /// Get the biome assigned to the cell containing the given column, if that cell was populated.
    pub fn biome_at(&self, col: ColumnPos) -> Option<BiomeEntry> {
        self.biome_in_cell(self.cell_of(col))
    }

    /// Get the biome assigned to the given cell, if it was populated.
    pub fn biome_in_cell(&self, cell: CellPos) -> Option<BiomeEntry> {
        self.cells.get(&cell).copied()
    }

    /// Assigns a biome to a cell if it has none yet; returns the entry that is now in effect.
    pub fn assign(&mut self, cell: CellPos, entry: BiomeEntry) -> BiomeEntry {
        *self.cells.entry(cell).or_insert(entry)
    }

    /// Whether the given cell already has a biome.
    pub fn is_assigned(&self, cell: CellPos) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Number of assigned cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cells have been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over all assigned cells.
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, BiomeEntry)> + '_ {
        self.cells.iter().map(|(&cell, &entry)| (cell, entry))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::registry::RegistryId;

    fn entry(raw: u32) -> BiomeEntry {
        BiomeEntry::new(RegistryId::try_from(raw).unwrap())
    }

    #[test]
    fn assignment_keeps_the_first_write() {
        let mut map = BiomeMap::new(16);
        let cell = CellPos::new(1, -2);
        assert_eq!(map.assign(cell, entry(1)), entry(1));
        assert_eq!(map.assign(cell, entry(2)), entry(1));
        assert_eq!(map.biome_in_cell(cell), Some(entry(1)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn queries_snap_to_the_owning_cell() {
        let mut map = BiomeMap::new(16);
        map.assign(CellPos::new(0, 0), entry(3));
        assert_eq!(map.biome_at(ColumnPos::new(0, 0)), Some(entry(3)));
        assert_eq!(map.biome_at(ColumnPos::new(15, 15)), Some(entry(3)));
        assert_eq!(map.biome_at(ColumnPos::new(16, 0)), None);
        assert_eq!(map.biome_at(ColumnPos::new(-1, 0)), None);
    }

    #[test]
    fn unpopulated_cells_have_no_biome() {
        let map = BiomeMap::new(8);
        assert!(map.is_empty());
        assert_eq!(map.biome_at(ColumnPos::new(100, 100)), None);
        assert!(!map.is_assigned(CellPos::new(12, 12)));
    }
}
