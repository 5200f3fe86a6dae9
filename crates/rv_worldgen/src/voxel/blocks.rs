//! The builtin block types.

use rv_schemas::dependencies::rgb::RGBA8;
use rv_schemas::registry::RegistryName;
use rv_schemas::voxel::voxeltypes::{BlockDefinition, BlockRegistry, EMPTY_BLOCK};

/// Registry name for stone.
pub const STONE_BLOCK_NAME: RegistryName = RegistryName::rv_const("stone");
/// Registry name for dirt.
pub const DIRT_BLOCK_NAME: RegistryName = RegistryName::rv_const("dirt");
/// Registry name for grass.
pub const GRASS_BLOCK_NAME: RegistryName = RegistryName::rv_const("grass");
/// Registry name for sand.
pub const SAND_BLOCK_NAME: RegistryName = RegistryName::rv_const("sand");
/// Registry name for snow.
pub const SNOW_BLOCK_NAME: RegistryName = RegistryName::rv_const("snow");

/// Installs the base set of blocks into the given block registry.
pub fn setup_basic_blocks(registry: &mut BlockRegistry) {
    registry.push_object(EMPTY_BLOCK.clone()).unwrap();
    registry
        .push_object(BlockDefinition {
            name: STONE_BLOCK_NAME,
            representative_color: RGBA8::new(64, 64, 64, 255),
            has_collision_box: true,
            has_drawable_mesh: true,
        })
        .unwrap();
    registry
        .push_object(BlockDefinition {
            name: DIRT_BLOCK_NAME,
            representative_color: RGBA8::new(110, 81, 0, 255),
            has_collision_box: true,
            has_drawable_mesh: true,
        })
        .unwrap();
    registry
        .push_object(BlockDefinition {
            name: GRASS_BLOCK_NAME,
            representative_color: RGBA8::new(30, 230, 30, 255),
            has_collision_box: true,
            has_drawable_mesh: true,
        })
        .unwrap();
    registry
        .push_object(BlockDefinition {
            name: SAND_BLOCK_NAME,
            representative_color: RGBA8::new(227, 216, 159, 255),
            has_collision_box: true,
            has_drawable_mesh: true,
        })
        .unwrap();
    registry
        .push_object(BlockDefinition {
            name: SNOW_BLOCK_NAME,
            representative_color: RGBA8::new(230, 230, 240, 255),
            has_collision_box: true,
            has_drawable_mesh: true,
        })
        .unwrap();
}
