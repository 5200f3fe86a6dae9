//! A collection of strongly typed newtype wrappers for the coordinate formats of the generated
//! world, and the canonical string key form used to address coordinate-keyed data.

use std::fmt::{Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

use bevy_math::{IVec2, IVec3};
use bytemuck::{Pod, Zeroable};
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between the integer fields of a canonical coordinate key.
pub const KEY_SEPARATOR: char = ',';

/// Error when a string key does not decode into a coordinate of the expected arity.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InvalidKeyError {
    /// The key did not split into the expected number of fields.
    #[error("key {key:?} has {found} fields, expected {expected}")]
    FieldCount {
        /// The rejected key.
        key: String,
        /// Number of fields required by the target coordinate type.
        expected: usize,
        /// Number of fields actually present.
        found: usize,
    },
    /// A field of the key is not a well-formed integer.
    #[error("field {field:?} of key {key:?} is not a valid integer")]
    Field {
        /// The rejected key.
        key: String,
        /// The offending field.
        field: String,
        /// The underlying integer parse failure.
        source: ParseIntError,
    },
}

/// Splits a key into exactly `N` integer fields, or reports how it is malformed.
fn parse_key_fields<const N: usize>(key: &str) -> Result<[i32; N], InvalidKeyError> {
    let mut fields = [0i32; N];
    let mut found = 0usize;
    for part in key.split(KEY_SEPARATOR) {
        if found < N {
            fields[found] = part.parse().map_err(|source| InvalidKeyError::Field {
                key: key.to_owned(),
                field: part.to_owned(),
                source,
            })?;
        }
        found += 1;
    }
    if found != N {
        return Err(InvalidKeyError::FieldCount {
            key: key.to_owned(),
            expected: N,
            found,
        });
    }
    Ok(fields)
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Pod, Zeroable, Serialize, Deserialize)]
#[repr(transparent)]
/// A world column position: the 2D address shared by every voxel in a vertical column.
pub struct ColumnPos(pub(crate) IVec2);

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Pod, Zeroable, Serialize, Deserialize)]
#[repr(transparent)]
/// An absolute voxel position in the world; `z` is the vertical axis.
pub struct BlockPos(pub(crate) IVec3);

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Pod, Zeroable, Serialize, Deserialize)]
#[repr(transparent)]
/// A biome cell position, in cell-grid units (one step = one biome cell).
pub struct CellPos(pub(crate) IVec2);

// === Utils
macro_rules! impl_simple_ivec2_newtype {
    ($T:ident) => {
        impl $T {
            /// (0, 0)
            pub const ZERO: Self = Self(IVec2::ZERO);
            /// (1, 1)
            pub const ONE: Self = Self(IVec2::ONE);
            /// (1, 0)
            pub const X: Self = Self(IVec2::X);
            /// (0, 1)
            pub const Y: Self = Self(IVec2::Y);

            /// Const-friendly `from<IVec2>`
            #[inline]
            pub const fn from_ivec2(value: IVec2) -> Self {
                Self(value)
            }

            /// Const-friendly `into<IVec2>`
            #[inline]
            pub const fn into_ivec2(self) -> IVec2 {
                self.0
            }

            /// Constructs a new [`Self`] from the given coordinates.
            #[inline]
            pub const fn new(x: i32, y: i32) -> Self {
                Self(IVec2::new(x, y))
            }

            /// Constructs a new [`Self`] from a given coordinate copied to both dimensions.
            #[inline]
            pub const fn splat(v: i32) -> Self {
                Self(IVec2::splat(v))
            }
        }

        impl From<IVec2> for $T {
            #[inline]
            fn from(value: IVec2) -> Self {
                Self::from_ivec2(value)
            }
        }
        impl From<$T> for IVec2 {
            #[inline]
            fn from(value: $T) -> IVec2 {
                value.into_ivec2()
            }
        }
        impl std::ops::Deref for $T {
            type Target = IVec2;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

// === ColumnPos
impl_simple_ivec2_newtype!(ColumnPos);

impl ColumnPos {
    /// Attaches a vertical coordinate, producing the position of one voxel of this column.
    #[inline]
    pub const fn with_z(self, z: i32) -> BlockPos {
        BlockPos(IVec3::new(self.0.x, self.0.y, z))
    }

    /// Encodes the position as its canonical key.
    pub fn to_key(self) -> String {
        self.to_string()
    }

    /// Decodes a canonical `"x,y"` key back into a position.
    pub fn from_key(key: &str) -> Result<Self, InvalidKeyError> {
        let [x, y] = parse_key_fields(key)?;
        Ok(Self::new(x, y))
    }
}

/// Formats as the canonical key (`"x,y"`); the inverse of [`ColumnPos::from_key`].
impl Display for ColumnPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.x, KEY_SEPARATOR, self.y)
    }
}

impl FromStr for ColumnPos {
    type Err = InvalidKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

// === BlockPos

impl BlockPos {
    /// (0, 0, 0)
    pub const ZERO: Self = Self(IVec3::ZERO);
    /// (1, 1, 1)
    pub const ONE: Self = Self(IVec3::ONE);
    /// (0, 0, 1)
    pub const Z: Self = Self(IVec3::Z);

    /// Const-friendly `from<IVec3>`
    #[inline]
    pub const fn from_ivec3(value: IVec3) -> Self {
        Self(value)
    }

    /// Const-friendly `into<IVec3>`
    #[inline]
    pub const fn into_ivec3(self) -> IVec3 {
        self.0
    }

    /// Constructs a new [`Self`] from the given coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(IVec3::new(x, y, z))
    }

    /// The column this voxel belongs to.
    #[inline]
    pub const fn column(self) -> ColumnPos {
        ColumnPos(IVec2::new(self.0.x, self.0.y))
    }

    /// Encodes the position as its canonical key.
    pub fn to_key(self) -> String {
        self.to_string()
    }

    /// Decodes a canonical `"x,y,z"` key back into a position.
    pub fn from_key(key: &str) -> Result<Self, InvalidKeyError> {
        let [x, y, z] = parse_key_fields(key)?;
        Ok(Self::new(x, y, z))
    }
}

impl From<IVec3> for BlockPos {
    #[inline]
    fn from(value: IVec3) -> Self {
        Self::from_ivec3(value)
    }
}

impl From<BlockPos> for IVec3 {
    #[inline]
    fn from(value: BlockPos) -> IVec3 {
        value.into_ivec3()
    }
}

impl std::ops::Deref for BlockPos {
    type Target = IVec3;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Formats as the canonical key (`"x,y,z"`); the inverse of [`BlockPos::from_key`].
impl Display for BlockPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.x,
            self.y,
            self.z,
            sep = KEY_SEPARATOR
        )
    }
}

impl FromStr for BlockPos {
    type Err = InvalidKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

// === CellPos
impl_simple_ivec2_newtype!(CellPos);

impl CellPos {
    /// The cell owning the given column, with the cell origin snapped down to the cell grid.
    #[inline]
    pub fn from_column(col: ColumnPos, cell_size: i32) -> Self {
        Self::new(col.x.div_euclid(cell_size), col.y.div_euclid(cell_size))
    }

    /// The minimum-corner column of this cell.
    #[inline]
    pub const fn origin_column(self, cell_size: i32) -> ColumnPos {
        ColumnPos(IVec2::new(self.0.x * cell_size, self.0.y * cell_size))
    }

    /// Iterates over all columns in the half-open `[origin, origin + cell_size)` footprint of this cell.
    pub fn columns(self, cell_size: i32) -> impl Iterator<Item = ColumnPos> {
        let origin = self.origin_column(cell_size);
        iproduct!(0..cell_size, 0..cell_size).map(move |(dx, dy)| ColumnPos::new(origin.x + dx, origin.y + dy))
    }

    /// The four axis-aligned neighbor cells, in -y, +y, -x, +x order.
    pub const fn neighbors(self) -> [CellPos; 4] {
        [
            Self::new(self.0.x, self.0.y - 1),
            Self::new(self.0.x, self.0.y + 1),
            Self::new(self.0.x - 1, self.0.y),
            Self::new(self.0.x + 1, self.0.y),
        ]
    }
}

impl Display for CellPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell(x={}, y={})", self.x, self.y)
    }
}

#[cfg(test)]
mod test {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[quickcheck]
    fn block_key_roundtrips(x: i32, y: i32, z: i32) -> bool {
        let pos = BlockPos::new(x, y, z);
        BlockPos::from_key(&pos.to_key()) == Ok(pos)
    }

    #[quickcheck]
    fn column_key_roundtrips(x: i32, y: i32) -> bool {
        let pos = ColumnPos::new(x, y);
        ColumnPos::from_key(&pos.to_key()) == Ok(pos)
    }

    #[quickcheck]
    fn snapped_cell_contains_column(x: i32, y: i32) -> bool {
        // Stay away from i32::MAX so the origin computation cannot overflow.
        let col = ColumnPos::new(x % 1_000_000, y % 1_000_000);
        let cell = CellPos::from_column(col, 16);
        let origin = cell.origin_column(16);
        origin.x <= col.x && col.x < origin.x + 16 && origin.y <= col.y && col.y < origin.y + 16
    }

    #[test]
    fn block_key_has_three_fields() {
        assert_eq!(BlockPos::new(1, -2, 3).to_key(), "1,-2,3");
        assert_eq!(BlockPos::from_key("1,-2,3"), Ok(BlockPos::new(1, -2, 3)));
        assert_eq!("7,8,-9".parse(), Ok(BlockPos::new(7, 8, -9)));
    }

    #[test]
    fn short_key_is_rejected() {
        assert_eq!(
            BlockPos::from_key("1,2"),
            Err(InvalidKeyError::FieldCount {
                key: "1,2".to_owned(),
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn long_key_is_rejected() {
        assert_eq!(
            ColumnPos::from_key("1,2,3"),
            Err(InvalidKeyError::FieldCount {
                key: "1,2,3".to_owned(),
                expected: 2,
                found: 3,
            })
        );
    }

    #[test]
    fn malformed_fields_are_rejected() {
        assert!(matches!(BlockPos::from_key("a,b,c"), Err(InvalidKeyError::Field { .. })));
        assert!(matches!(BlockPos::from_key("1,,3"), Err(InvalidKeyError::Field { .. })));
        assert!(matches!(BlockPos::from_key("1.5,2,3"), Err(InvalidKeyError::Field { .. })));
        assert!(matches!(ColumnPos::from_key(" 1,2"), Err(InvalidKeyError::Field { .. })));
        assert!(ColumnPos::from_key("").is_err());
    }

    #[test]
    fn cell_snapping_uses_euclidean_division() {
        assert_eq!(CellPos::from_column(ColumnPos::new(0, 0), 16), CellPos::ZERO);
        assert_eq!(CellPos::from_column(ColumnPos::new(15, 15), 16), CellPos::ZERO);
        assert_eq!(CellPos::from_column(ColumnPos::new(16, 0), 16), CellPos::new(1, 0));
        assert_eq!(CellPos::from_column(ColumnPos::new(-1, -16), 16), CellPos::new(-1, -1));
        assert_eq!(CellPos::from_column(ColumnPos::new(-17, 31), 16), CellPos::new(-2, 1));
    }

    #[test]
    fn cell_footprint_covers_the_cell_exactly() {
        let cell = CellPos::new(-1, 2);
        let columns: Vec<ColumnPos> = cell.columns(4).collect();
        assert_eq!(columns.len(), 16);
        for col in columns {
            assert_eq!(CellPos::from_column(col, 4), cell);
        }
    }

    #[test]
    fn column_and_z_recombine_into_block() {
        let pos = BlockPos::new(3, -4, 12);
        assert_eq!(pos.column().with_z(pos.z), pos);
    }
}
