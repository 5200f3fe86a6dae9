#![warn(missing_docs)]
#![deny(clippy::disallowed_types)]

//! A library crate of the in-memory representations of the Ringvale world's core data.

pub mod coordinates;
pub mod registries;
pub mod registry;
pub mod voxel;

/// Re-exported dependencies used in API types
pub mod dependencies {
    pub use bevy_math;
    pub use bytemuck;
    pub use hashbrown;
    pub use itertools;
    pub use kstring;
    pub use rgb;
    pub use serde;
    pub use thiserror;
}
