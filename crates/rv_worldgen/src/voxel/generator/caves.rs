//! Random cave carving: a subtractive pass over the filled voxel store.

use itertools::iproduct;
use rand::distributions::Uniform;
use rand::Rng;
use rand_xoshiro::Xoshiro128StarStar;
use rv_schemas::coordinates::BlockPos;
use rv_schemas::voxel::store::VoxelWorld;

use crate::config::WorldgenConfig;

/// Carves `num_caves` random cuboid voids out of the world.
///
/// Cave centers are drawn from a snapshot of the positions filled before the first carve, so a
/// later carve may pick an already-emptied center; removing absent voxels is a no-op. Carving
/// only ever removes voxels.
pub fn carve_caves(world: &mut VoxelWorld, random: &mut Xoshiro128StarStar, config: &WorldgenConfig) {
    if config.num_caves == 0 || world.is_empty() {
        return;
    }
    let candidates: Vec<BlockPos> = world.positions().collect();
    let center_picker = Uniform::new(0, candidates.len());
    let z_start_picker = Uniform::new(config.min_z, 0);
    for _ in 0..config.num_caves {
        let center = candidates[random.sample(center_picker)];
        let z_start = random.sample(z_start_picker);
        carve_box(world, center, z_start, config.cave_radius);
    }
}

/// Removes every voxel in the box `[x-r, x+r] × [y-r, y+r] × [z_start, z_start+r)` around `center`.
pub(crate) fn carve_box(world: &mut VoxelWorld, center: BlockPos, z_start: i32, radius: i32) {
    for (x, y) in iproduct!(
        center.x - radius..=center.x + radius,
        center.y - radius..=center.y + radius
    ) {
        for z in z_start..z_start + radius {
            world.remove(BlockPos::new(x, y, z));
        }
    }
}

#[cfg(test)]
mod test {
    use itertools::iproduct;
    use rand::SeedableRng;
    use rv_schemas::registry::RegistryId;
    use rv_schemas::voxel::voxeltypes::BlockEntry;

    use super::*;

    fn filled_slab(half_extent: i32, z_min: i32, z_max: i32) -> VoxelWorld {
        let id = RegistryId::try_from(1).unwrap();
        let mut world = VoxelWorld::new();
        for (x, y) in iproduct!(-half_extent..=half_extent, -half_extent..=half_extent) {
            for z in z_min..=z_max {
                world.put(BlockPos::new(x, y, z), BlockEntry::new(id, id));
            }
        }
        world
    }

    #[test]
    fn carve_box_clears_the_full_footprint() {
        let mut world = filled_slab(4, -4, 2);
        let before = world.len();
        carve_box(&mut world, BlockPos::new(0, 0, -1), -3, 2);
        // Every row of the x/y footprint must be cleared, for the whole carved z span.
        for (x, y) in iproduct!(-2..=2, -2..=2) {
            for z in -3..-1 {
                assert!(!world.contains(BlockPos::new(x, y, z)), "voxel left at ({x}, {y}, {z})");
            }
        }
        assert_eq!(before - world.len(), 5 * 5 * 2);
        // Voxels outside the box are untouched.
        assert!(world.contains(BlockPos::new(3, 0, -2)));
        assert!(world.contains(BlockPos::new(0, -3, -2)));
        assert!(world.contains(BlockPos::new(0, 0, -1)));
    }

    #[test]
    fn carve_box_with_zero_radius_removes_nothing() {
        let mut world = filled_slab(2, -2, 2);
        let before = world.len();
        carve_box(&mut world, BlockPos::new(0, 0, 0), -2, 0);
        assert_eq!(world.len(), before);
    }

    #[test]
    fn carving_air_is_harmless() {
        let mut world = filled_slab(1, -1, 1);
        let before = world.len();
        carve_box(&mut world, BlockPos::new(100, 100, 0), -1, 1);
        assert_eq!(world.len(), before);
    }

    #[test]
    fn carve_caves_never_adds_voxels() {
        let mut world = filled_slab(6, -6, 3);
        let reference = world.clone();
        let mut random = Xoshiro128StarStar::seed_from_u64(7);
        let config = WorldgenConfig {
            num_caves: 5,
            cave_radius: 2,
            min_z: -6,
            ..WorldgenConfig::default()
        };
        carve_caves(&mut world, &mut random, &config);
        assert!(world.len() <= reference.len());
        for pos in world.positions() {
            assert_eq!(world.get(pos), reference.get(pos));
        }
    }

    #[test]
    fn carving_an_empty_world_is_a_no_op() {
        let mut world = VoxelWorld::new();
        let mut random = Xoshiro128StarStar::seed_from_u64(7);
        carve_caves(&mut world, &mut random, &WorldgenConfig::default());
        assert!(world.is_empty());
    }
}
