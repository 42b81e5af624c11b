//! Owned typed sequences with the element width chosen at runtime

use serde::{Deserialize, Serialize};

use crate::bytes::{self, ByteOrder, ScalarWidth};
use crate::error::Result;

/// A one-dimensional array of one scalar width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "width", content = "values", rename_all = "snake_case")]
pub enum ScalarArray {
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

/// Run `$body` with `$values` bound to the inner vector, whatever its element type
macro_rules! with_values {
    ($array:expr, $values:ident => $body:expr) => {
        match $array {
            ScalarArray::Int8($values) => $body,
            ScalarArray::Int16($values) => $body,
            ScalarArray::Int32($values) => $body,
            ScalarArray::Int64($values) => $body,
            ScalarArray::Float32($values) => $body,
            ScalarArray::Float64($values) => $body,
        }
    };
}

impl ScalarArray {
    pub fn width(&self) -> ScalarWidth {
        match self {
            Self::Int8(_) => ScalarWidth::Int8,
            Self::Int16(_) => ScalarWidth::Int16,
            Self::Int32(_) => ScalarWidth::Int32,
            Self::Int64(_) => ScalarWidth::Int64,
            Self::Float32(_) => ScalarWidth::Float32,
            Self::Float64(_) => ScalarWidth::Float64,
        }
    }

    pub fn len(&self) -> usize {
        with_values!(self, values => values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the encoded payload in bytes
    pub fn byte_len(&self) -> usize {
        self.len() * self.width().size_in_bytes()
    }

    /// Encode all elements in the given byte order
    pub fn to_bytes(&self, order: ByteOrder) -> Vec<u8> {
        with_values!(self, values => bytes::to_bytes(values, order))
    }

    /// Decode a whole buffer as elements of `width`
    pub fn from_bytes(width: ScalarWidth, src: &[u8], order: ByteOrder) -> Result<Self> {
        Ok(match width {
            ScalarWidth::Int8 => Self::Int8(bytes::from_bytes(src, order)?),
            ScalarWidth::Int16 => Self::Int16(bytes::from_bytes(src, order)?),
            ScalarWidth::Int32 => Self::Int32(bytes::from_bytes(src, order)?),
            ScalarWidth::Int64 => Self::Int64(bytes::from_bytes(src, order)?),
            ScalarWidth::Float32 => Self::Float32(bytes::from_bytes(src, order)?),
            ScalarWidth::Float64 => Self::Float64(bytes::from_bytes(src, order)?),
        })
    }
}

macro_rules! impl_from_vec {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$ty>> for ScalarArray {
                fn from(values: Vec<$ty>) -> Self {
                    Self::$variant(values)
                }
            }
        )*
    };
}

impl_from_vec! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_width_and_lengths() {
        let array = ScalarArray::from(vec![1.0f32, 2.0, 3.0]);
        assert_eq!(array.width(), ScalarWidth::Float32);
        assert_eq!(array.len(), 3);
        assert_eq!(array.byte_len(), 12);
        assert!(!array.is_empty());
        assert!(ScalarArray::Int64(Vec::new()).is_empty());
    }

    #[test]
    fn test_runtime_dispatch_matches_generic() {
        let values = vec![-2i64, 0, i64::MAX];
        let array = ScalarArray::from(values.clone());
        assert_eq!(
            array.to_bytes(ByteOrder::BigEndian),
            bytes::to_bytes(&values, ByteOrder::BigEndian)
        );
    }

    #[test]
    fn test_from_bytes_every_width() {
        for width in ScalarWidth::ALL {
            let raw = vec![0u8; width.size_in_bytes() * 3];
            let array = ScalarArray::from_bytes(width, &raw, ByteOrder::LittleEndian).unwrap();
            assert_eq!(array.width(), width);
            assert_eq!(array.len(), 3);
        }
    }

    #[test]
    fn test_from_bytes_misaligned() {
        let err = ScalarArray::from_bytes(ScalarWidth::Int16, &[1, 2, 3], ByteOrder::Native)
            .unwrap_err();
        assert!(err.is_out_of_bounds());
    }

    #[test]
    fn test_serde_shape() {
        let array = ScalarArray::from(vec![1i16, -1]);
        let json = serde_json::to_string(&array).unwrap();
        assert_eq!(json, r#"{"width":"int16","values":[1,-1]}"#);
        let back: ScalarArray = serde_json::from_str(&json).unwrap();
        assert_eq!(back, array);
    }
}
