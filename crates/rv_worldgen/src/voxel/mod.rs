//! Voxel world generation: the builtin type sets and the generation pipeline.

pub mod biomes;
pub mod blocks;
pub mod generator;
