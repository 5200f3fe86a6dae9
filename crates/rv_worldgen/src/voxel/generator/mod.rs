//! Standard world generator.

use std::collections::VecDeque;
use std::time::Instant;

use hashbrown::HashSet;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro128StarStar;
use rv_schemas::coordinates::{BlockPos, CellPos, ColumnPos};
use rv_schemas::registry::RegistryId;
use rv_schemas::voxel::biome::biome_map::BiomeMap;
use rv_schemas::voxel::biome::{BiomeEntry, BiomeRegistry};
use rv_schemas::voxel::store::VoxelWorld;
use rv_schemas::voxel::voxeltypes::{BlockEntry, BlockRegistry};
use tracing::{debug, info};

use crate::config::WorldgenConfig;

pub mod caves;
pub mod height;

pub use height::terrain_height_at;

/// Standard world generator implementation.
///
/// Owns the biome map and voxel store while the pipeline runs, then hands them
/// off as a read-only [`GeneratedWorld`].
pub struct WorldGenerator {
    config: WorldgenConfig,
    random: Xoshiro128StarStar,
    biome_map: BiomeMap,
    voxels: VoxelWorld,
}

impl WorldGenerator {
    /// Creates a new generator for the given configuration.
    ///
    /// # Panics
    /// Panics if `biome_size` is not positive, `min_z` is not negative, or
    /// `cave_radius` is negative.
    pub fn new(config: WorldgenConfig) -> Self {
        assert!(config.biome_size > 0, "biome cells must have a positive size");
        assert!(config.min_z < 0, "the generation floor must lie below z=0");
        assert!(config.cave_radius >= 0, "the cave radius cannot be negative");
        Self {
            random: Xoshiro128StarStar::seed_from_u64(config.seed),
            biome_map: BiomeMap::new(config.biome_size),
            voxels: VoxelWorld::new(),
            config,
        }
    }

    /// Runs the full pipeline: biome assignment, voxel fill, cave carving.
    pub fn generate(mut self, biome_registry: &BiomeRegistry, block_registry: &BlockRegistry) -> GeneratedWorld {
        let total = Instant::now();

        let start = Instant::now();
        self.populate_biomes(biome_registry);
        debug!(cells = self.biome_map.len(), took = ?start.elapsed(), "biome assignment finished");

        let start = Instant::now();
        self.populate_world(biome_registry, block_registry);
        debug!(voxels = self.voxels.len(), took = ?start.elapsed(), "voxel fill finished");

        let start = Instant::now();
        let filled = self.voxels.len();
        caves::carve_caves(&mut self.voxels, &mut self.random, &self.config);
        debug!(removed = filled - self.voxels.len(), took = ?start.elapsed(), "cave carving finished");

        info!(
            cells = self.biome_map.len(),
            voxels = self.voxels.len(),
            took = ?total.elapsed(),
            "world generation finished"
        );
        GeneratedWorld {
            biome_map: self.biome_map,
            voxels: self.voxels,
        }
    }

    /// The cells the generator covers: a breadth-first frontier walk from the
    /// origin cell, bounded by flood-fill depth. Both the biome pass and the
    /// voxel pass iterate this same region, so a cell has a biome if and only
    /// if its columns are filled.
    fn reachable_cells(max_depth: u32) -> Vec<CellPos> {
        let mut visited = HashSet::new();
        let mut frontier = VecDeque::new();
        let mut order = Vec::new();
        visited.insert(CellPos::ZERO);
        frontier.push_back((CellPos::ZERO, 0u32));
        while let Some((cell, depth)) = frontier.pop_front() {
            order.push(cell);
            if depth >= max_depth {
                continue;
            }
            for neighbor in cell.neighbors() {
                if visited.insert(neighbor) {
                    frontier.push_back((neighbor, depth + 1));
                }
            }
        }
        order
    }

    /// Assigns a uniformly random generatable biome to every reachable cell.
    ///
    /// Assignment is first-write-wins, so re-running the pass never changes an
    /// already-assigned cell.
    fn populate_biomes(&mut self, biome_registry: &BiomeRegistry) {
        let mut generatable: Vec<RegistryId> = biome_registry
            .iter()
            .filter(|(_, _, def)| def.can_generate)
            .map(|(id, _, _)| id)
            .collect();
        // Registry iteration order is not stable; sort so a fixed seed yields a fixed world.
        generatable.sort_unstable();
        assert!(!generatable.is_empty(), "the biome registry has no generatable biomes");

        for cell in Self::reachable_cells(self.config.max_generation_depth) {
            let id = generatable[self.random.gen_range(0..generatable.len())];
            self.biome_map.assign(cell, BiomeEntry::new(id));
        }
    }

    /// Fills voxel columns for the same cell region the biome pass covered.
    fn populate_world(&mut self, biome_registry: &BiomeRegistry, block_registry: &BlockRegistry) {
        for cell in Self::reachable_cells(self.config.max_generation_depth) {
            self.fill_cell(cell, biome_registry, block_registry);
        }
    }

    /// Fills every column of one biome cell with a solid span from the floor
    /// up to and including the column's terrain height.
    fn fill_cell(&mut self, cell: CellPos, biome_registry: &BiomeRegistry, block_registry: &BlockRegistry) {
        let biome = self
            .biome_map
            .biome_in_cell(cell)
            .expect("voxel fill visited a cell the biome pass never assigned");
        let def = biome
            .lookup(biome_registry)
            .expect("assigned biome is missing from the registry");
        let (fill_block, _) = block_registry
            .lookup_name_to_object(def.fill_block.as_ref())
            .expect("biome fill block is missing from the block registry");
        let entry = BlockEntry::new(fill_block, biome.id);

        for col in cell.columns(self.config.biome_size) {
            let column_height = height::terrain_height_at(col, self.config.height_variation);
            for z in self.config.min_z..=column_height {
                self.voxels.put(col.with_z(z), entry);
            }
        }
    }
}

/// A finished, read-only generated world: biome assignments plus the sparse voxel store.
pub struct GeneratedWorld {
    biome_map: BiomeMap,
    voxels: VoxelWorld,
}

impl GeneratedWorld {
    /// Looks up the voxel at the given position.
    ///
    /// `None` means air: never generated, above the terrain, or carved out.
    pub fn block_at(&self, pos: BlockPos) -> Option<&BlockEntry> {
        self.voxels.get(pos)
    }

    /// Looks up the biome of the cell containing the given column, or `None`
    /// outside the generated region.
    pub fn biome_at(&self, col: ColumnPos) -> Option<BiomeEntry> {
        self.biome_map.biome_at(col)
    }

    /// The biome cell assignments.
    pub fn biome_map(&self) -> &BiomeMap {
        &self.biome_map
    }

    /// The sparse voxel store.
    pub fn voxels(&self) -> &VoxelWorld {
        &self.voxels
    }
}
