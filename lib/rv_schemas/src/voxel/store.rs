//! Sparse HashMap-backed storage for the generated world's voxels.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::coordinates::BlockPos;
use crate::voxel::voxeltypes::BlockEntry;

/// Sparse voxel storage for the whole generated world.
///
/// Presence of a key means a solid voxel; absence means air. No explicit "empty" value is ever
/// stored, so removing an absent position is a no-op.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct VoxelWorld {
    blocks: HashMap<BlockPos, BlockEntry>,
}

impl VoxelWorld {
    /// Creates an empty world store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the voxel at the given position; `None` means air.
    pub fn get(&self, pos: BlockPos) -> Option<&BlockEntry> {
        self.blocks.get(&pos)
    }

    /// Whether a solid voxel is present at the given position.
    pub fn contains(&self, pos: BlockPos) -> bool {
        self.blocks.contains_key(&pos)
    }

    /// Stores a voxel, returning the previous entry at that position if any.
    pub fn put(&mut self, pos: BlockPos, entry: BlockEntry) -> Option<BlockEntry> {
        self.blocks.insert(pos, entry)
    }

    /// Removes the voxel at the given position, returning it if one was present.
    pub fn remove(&mut self, pos: BlockPos) -> Option<BlockEntry> {
        self.blocks.remove(&pos)
    }

    /// Number of solid voxels in the store.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the store holds no voxels at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates over the positions of all solid voxels.
    pub fn positions(&self) -> impl Iterator<Item = BlockPos> + '_ {
        self.blocks.keys().copied()
    }

    /// Iterates over all solid voxels.
    pub fn iter(&self) -> impl Iterator<Item = (BlockPos, &BlockEntry)> + '_ {
        self.blocks.iter().map(|(&pos, entry)| (pos, entry))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::registry::RegistryId;

    fn entry(raw: u32) -> BlockEntry {
        let id = RegistryId::try_from(raw).unwrap();
        BlockEntry::new(id, id)
    }

    #[test]
    fn put_get_remove() {
        let mut world = VoxelWorld::new();
        let pos = BlockPos::new(1, 2, -3);
        assert!(world.get(pos).is_none());
        assert_eq!(world.put(pos, entry(1)), None);
        assert_eq!(world.get(pos), Some(&entry(1)));
        assert_eq!(world.put(pos, entry(2)), Some(entry(1)));
        assert_eq!(world.remove(pos), Some(entry(2)));
        assert!(world.is_empty());
    }

    #[test]
    fn removing_air_is_a_no_op() {
        let mut world = VoxelWorld::new();
        world.put(BlockPos::new(0, 0, 0), entry(1));
        assert_eq!(world.remove(BlockPos::new(5, 5, 5)), None);
        assert_eq!(world.len(), 1);
    }
}
