//! World generator configuration handling

use smart_default::SmartDefault;

/// The tunable inputs of the world generation pipeline.
///
/// Treated as immutable once a generator has been constructed from it.
#[derive(Copy, Clone, Eq, PartialEq, Debug, SmartDefault)]
pub struct WorldgenConfig {
    /// Seed of the world RNG; the same seed always produces the same world.
    #[default = 42]
    pub seed: u64,
    /// Side length of a biome cell, in columns.
    #[default = 16]
    pub biome_size: i32,
    /// How many flood-fill steps away from the origin cell still get generated.
    #[default = 4]
    pub max_generation_depth: u32,
    /// Amplitude of the terrain height field, in voxels.
    #[default = 10]
    pub height_variation: i32,
    /// The lowest generated layer; terrain columns are solid from here up to
    /// their height. Must be negative.
    #[default(-16)]
    pub min_z: i32,
    /// Number of cave carving passes run over the filled world.
    #[default = 12]
    pub num_caves: u32,
    /// Half-extent of a carved cave box along x/y, and its full z extent.
    #[default = 3]
    pub cave_radius: i32,
}
