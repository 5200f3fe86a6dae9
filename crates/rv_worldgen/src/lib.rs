#![warn(missing_docs)]
#![deny(clippy::disallowed_types)]

//! The Ringvale world generation pipeline: per-cell biome assignment over an
//! infinite plane, ring-banded terrain heights, sparse voxel fill, and random
//! cave carving.

pub mod config;
pub mod voxel;

use std::sync::Arc;

use rv_schemas::registries::WorldRegistries;
use rv_schemas::voxel::biome::BiomeRegistry;
use rv_schemas::voxel::voxeltypes::BlockRegistry;

pub use crate::config::WorldgenConfig;
pub use crate::voxel::generator::{GeneratedWorld, WorldGenerator};

/// Builds the registries holding the builtin block and biome type sets.
pub fn builtin_registries() -> WorldRegistries {
    let mut block_types = BlockRegistry::default();
    voxel::blocks::setup_basic_blocks(&mut block_types);
    let mut biome_types = BiomeRegistry::default();
    voxel::biomes::setup_basic_biomes(&mut biome_types);
    WorldRegistries {
        block_types: Arc::new(block_types),
        biome_types: Arc::new(biome_types),
    }
}

/// Generates a world from the builtin type sets and the given configuration.
pub fn generate_world(config: WorldgenConfig) -> GeneratedWorld {
    let registries = builtin_registries();
    WorldGenerator::new(config).generate(&registries.biome_types, &registries.block_types)
}
