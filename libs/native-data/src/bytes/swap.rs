//! Byte reversal of fixed-width elements

use tracing::debug;

use crate::error::{BufferSide, ConvertError, Result};

use super::ScalarWidth;

/// Reverse the bytes of one element in place
///
/// Byte `k` trades places with byte `len - 1 - k`; a one-byte chunk is left alone.
#[inline]
pub fn reverse_chunk(chunk: &mut [u8]) {
    let width = chunk.len();
    for k in 0..width / 2 {
        chunk.swap(k, width - 1 - k);
    }
}

/// Flip the byte order of every element of `buf` in place
///
/// `buf` must hold a whole number of elements; otherwise nothing is modified.
pub fn change_byte_order(buf: &mut [u8], width: ScalarWidth) -> Result<()> {
    let size = width.size_in_bytes();
    let remainder = buf.len() % size;
    if remainder != 0 {
        debug!(
            "Refusing byte order change: {} bytes is not a multiple of {} ({})",
            buf.len(),
            size,
            width
        );
        return Err(ConvertError::out_of_bounds(
            BufferSide::Source,
            buf.len() - remainder,
            size,
            buf.len(),
        ));
    }

    if size > 1 {
        buf.chunks_exact_mut(size).for_each(reverse_chunk);
    }
    Ok(())
}
