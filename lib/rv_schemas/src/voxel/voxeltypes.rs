//! Descriptors for in-game voxel/block types.
use std::fmt::{Debug, Formatter};

use rgb::RGBA8;
use serde::{Deserialize, Serialize};

use crate::registry::{Registry, RegistryId, RegistryName, RegistryNameRef, RegistryObject};
use crate::voxel::biome::{BiomeDefinition, BiomeRegistry};

/// A block reference stored in the world voxel store, tagging each voxel with its block type and
/// the biome it was generated from.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct BlockEntry {
    /// The block ID in the registry
    pub id: RegistryId,
    /// The ID of the biome this voxel was generated for
    pub biome: RegistryId,
}

/// A named registry of block definitions.
pub type BlockRegistry = Registry<BlockDefinition>;

impl BlockEntry {
    /// Helper to construct a new block entry
    pub fn new(id: RegistryId, biome: RegistryId) -> Self {
        Self { id, biome }
    }

    /// Helper to look up the block definition corresponding to this entry
    pub fn lookup(self, registry: &BlockRegistry) -> Option<&BlockDefinition> {
        registry.lookup_id_to_object(self.id)
    }

    /// Helper to look up the definition of the biome this voxel was generated for
    pub fn lookup_biome(self, registry: &BiomeRegistry) -> Option<&BiomeDefinition> {
        registry.lookup_id_to_object(self.biome)
    }
}

impl Debug for BlockEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "BlockEntry{{id={}, biome={}}}", self.id, self.biome)
    }
}

/// A definition of a block type, specifying properties such as registry name and display color.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlockDefinition {
    /// The unique registry name
    pub name: RegistryName,
    /// A color that can represent the block on maps, debug views, etc.
    pub representative_color: RGBA8,
    /// If the block can be collided with
    pub has_collision_box: bool,
    /// If the block has a mesh that can be rendered
    pub has_drawable_mesh: bool,
}

/// The registry name of [`EMPTY_BLOCK`]
pub const EMPTY_BLOCK_NAME: RegistryName = RegistryName::rv_const("empty");

/// The empty block definition, used when no specific blocks have been generated
pub static EMPTY_BLOCK: BlockDefinition = BlockDefinition {
    name: EMPTY_BLOCK_NAME,
    representative_color: RGBA8::new(0, 0, 0, 0),
    has_collision_box: false,
    has_drawable_mesh: false,
};

impl RegistryObject for BlockDefinition {
    fn registry_name(&self) -> RegistryNameRef {
        self.name.as_ref()
    }
}
