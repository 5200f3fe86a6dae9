//! All Biome-related types

use std::fmt::Debug;

use rgb::RGBA8;
use serde::{Deserialize, Serialize};

use crate::registry::{Registry, RegistryId, RegistryName, RegistryNameRef, RegistryObject};

pub mod biome_map;

/// A biome entry stored in the per-world biome map.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct BiomeEntry {
    /// The biome ID in registry.
    pub id: RegistryId,
}

/// A named registry of biome definitions.
pub type BiomeRegistry = Registry<BiomeDefinition>;

impl BiomeEntry {
    /// Helper to construct a new biome entry.
    pub fn new(id: RegistryId) -> Self {
        Self { id }
    }

    /// Helper to look up the biome definition corresponding to this entry.
    pub fn lookup(self, registry: &BiomeRegistry) -> Option<&BiomeDefinition> {
        registry.lookup_id_to_object(self.id)
    }
}

impl Debug for BiomeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BiomeEntry").field("id", &self.id).finish()
    }
}

/// A definition of a biome type, specifying properties such as registry name and terrain fill.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct BiomeDefinition {
    /// The unique registry name
    pub name: RegistryName,
    /// A color that can represent the biome on maps, debug views, etc.
    pub representative_color: RGBA8,
    /// The registry name of the block type terrain columns of this biome are filled with.
    pub fill_block: RegistryName,
    /// Whether the world generator may pick this biome when assigning cells.
    pub can_generate: bool,
}

impl RegistryObject for BiomeDefinition {
    fn registry_name(&self) -> RegistryNameRef {
        self.name.as_ref()
    }
}
