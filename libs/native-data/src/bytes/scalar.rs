//! Scalar widths and the element types that can be converted

use serde::{Deserialize, Serialize};

/// Fixed-width classification of a numeric element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarWidth {
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
}

impl ScalarWidth {
    pub const ALL: [ScalarWidth; 6] = [
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float32,
        Self::Float64,
    ];

    /// Size of one element in bytes
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::Int8 => 1,
            Self::Int16 => 2,
            Self::Int32 | Self::Float32 => 4,
            Self::Int64 | Self::Float64 => 8,
        }
    }

    pub const fn is_floating_point(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    pub const fn is_integer(self) -> bool {
        !self.is_floating_point()
    }

    /// Look up the width for an element kind and size, as stored in tagged headers
    pub const fn from_parts(floating_point: bool, size_in_bytes: usize) -> Option<Self> {
        match (floating_point, size_in_bytes) {
            (false, 1) => Some(Self::Int8),
            (false, 2) => Some(Self::Int16),
            (false, 4) => Some(Self::Int32),
            (false, 8) => Some(Self::Int64),
            (true, 4) => Some(Self::Float32),
            (true, 8) => Some(Self::Float64),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScalarWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        };
        f.write_str(name)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A primitive that can be reinterpreted as `SIZE` raw bytes in host layout
///
/// Implemented for `i8 u8 i16 u16 i32 u32 i64 u64 f32 f64`. `u16` also serves
/// as the 16-bit character type.
pub trait Scalar: Copy + Default + sealed::Sealed {
    const WIDTH: ScalarWidth;
    const SIZE: usize = Self::WIDTH.size_in_bytes();

    /// Write the host-layout bytes into `out`, which must be exactly `SIZE` long
    fn write_ne(self, out: &mut [u8]);

    /// Read a value from exactly `SIZE` host-layout bytes
    fn read_ne(bytes: &[u8]) -> Self;
}

macro_rules! impl_scalar {
    ($($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const WIDTH: ScalarWidth = ScalarWidth::$width;

                #[inline]
                fn write_ne(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_ne_bytes());
                }

                #[inline]
                fn read_ne(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(bytes);
                    <$ty>::from_ne_bytes(raw)
                }
            }
        )*
    };
}

impl_scalar! {
    i8 => Int8,
    u8 => Int8,
    i16 => Int16,
    u16 => Int16,
    i32 => Int32,
    u32 => Int32,
    i64 => Int64,
    u64 => Int64,
    f32 => Float32,
    f64 => Float64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_match_primitives() {
        assert_eq!(<i8 as Scalar>::SIZE, 1);
        assert_eq!(<u16 as Scalar>::SIZE, 2);
        assert_eq!(<i32 as Scalar>::SIZE, 4);
        assert_eq!(<f32 as Scalar>::SIZE, 4);
        assert_eq!(<u64 as Scalar>::SIZE, 8);
        assert_eq!(<f64 as Scalar>::SIZE, 8);
    }

    #[test]
    fn test_from_parts() {
        for width in ScalarWidth::ALL {
            assert_eq!(
                ScalarWidth::from_parts(width.is_floating_point(), width.size_in_bytes()),
                Some(width)
            );
        }
        assert_eq!(ScalarWidth::from_parts(true, 2), None);
        assert_eq!(ScalarWidth::from_parts(false, 3), None);
    }

    #[test]
    fn test_native_layout() {
        let mut out = [0u8; 4];
        0x0102_0304i32.write_ne(&mut out);
        assert_eq!(out, 0x0102_0304i32.to_ne_bytes());
        assert_eq!(i32::read_ne(&out), 0x0102_0304);
    }
}
