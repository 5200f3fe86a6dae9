//! The builtin biome types.

use rv_schemas::dependencies::rgb::RGBA8;
use rv_schemas::registry::RegistryName;
use rv_schemas::voxel::biome::{BiomeDefinition, BiomeRegistry};

use super::blocks::{DIRT_BLOCK_NAME, GRASS_BLOCK_NAME, SAND_BLOCK_NAME, SNOW_BLOCK_NAME};

/// Registry name for meadows.
pub const MEADOW_BIOME_NAME: RegistryName = RegistryName::rv_const("meadow");
/// Registry name for woodland.
pub const WOODLAND_BIOME_NAME: RegistryName = RegistryName::rv_const("woodland");
/// Registry name for deserts.
pub const DESERT_BIOME_NAME: RegistryName = RegistryName::rv_const("desert");
/// Registry name for snowfields.
pub const SNOWFIELD_BIOME_NAME: RegistryName = RegistryName::rv_const("snowfield");

/// Installs the base set of biomes into the given biome registry.
pub fn setup_basic_biomes(biome_registry: &mut BiomeRegistry) {
    biome_registry
        .push_object(BiomeDefinition {
            name: MEADOW_BIOME_NAME,
            representative_color: RGBA8::new(20, 180, 10, 255),
            fill_block: GRASS_BLOCK_NAME,
            can_generate: true,
        })
        .unwrap();
    biome_registry
        .push_object(BiomeDefinition {
            name: WOODLAND_BIOME_NAME,
            representative_color: RGBA8::new(15, 110, 10, 255),
            fill_block: DIRT_BLOCK_NAME,
            can_generate: true,
        })
        .unwrap();
    biome_registry
        .push_object(BiomeDefinition {
            name: DESERT_BIOME_NAME,
            representative_color: RGBA8::new(236, 213, 109, 255),
            fill_block: SAND_BLOCK_NAME,
            can_generate: true,
        })
        .unwrap();
    biome_registry
        .push_object(BiomeDefinition {
            name: SNOWFIELD_BIOME_NAME,
            representative_color: RGBA8::new(220, 220, 220, 255),
            fill_block: SNOW_BLOCK_NAME,
            can_generate: true,
        })
        .unwrap();
}
