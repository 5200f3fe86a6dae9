//! A collection of all the shared registries that define the world's closed type sets.

use std::sync::Arc;

use crate::voxel::biome::BiomeRegistry;
use crate::voxel::voxeltypes::BlockRegistry;

/// A struct holding all the relevant shared registries.
#[derive(Clone)]
pub struct WorldRegistries {
    /// Block (voxel) type definitions.
    pub block_types: Arc<BlockRegistry>,
    /// Biome type definitions.
    pub biome_types: Arc<BiomeRegistry>,
}
