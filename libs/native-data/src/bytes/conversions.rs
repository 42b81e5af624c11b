//! Typed buffer conversion
//!
//! Copies between scalar sequences and flat byte buffers, one element-sized
//! chunk per scalar, reversing each chunk when the requested [`ByteOrder`]
//! differs from the host. Every range is validated before the first write, so
//! a failed call leaves the destination untouched.

use std::ops::Range;

use tracing::{debug, trace};

use crate::error::{BufferSide, ConvertError, Result};

use super::{reverse_chunk, ByteOrder, Scalar};

/// Largest element size handled, used for the per-element scratch area
const MAX_SCALAR_SIZE: usize = 8;

/// Range covering `count` elements of `unit` units each, starting at `start`
fn checked_range(
    side: BufferSide,
    start: usize,
    count: usize,
    unit: usize,
    capacity: usize,
) -> Result<Range<usize>> {
    let len = count.checked_mul(unit);
    let end = len.and_then(|len| start.checked_add(len));
    match end {
        Some(end) if end <= capacity => Ok(start..end),
        Some(end) => {
            debug!(
                "Rejecting {} range {}..{} (length {})",
                side, start, end, capacity
            );
            Err(ConvertError::out_of_bounds(
                side,
                start,
                end - start,
                capacity,
            ))
        },
        None => {
            let len = len.unwrap_or(usize::MAX);
            debug!(
                "Rejecting {} range {}..{}+{}, end overflows (length {})",
                side, start, start, len, capacity
            );
            Err(ConvertError::out_of_bounds(side, start, len, capacity))
        },
    }
}

/// Write `src` into `dst`, which holds exactly `src.len() * T::SIZE` bytes
fn encode_into<T: Scalar>(src: &[T], dst: &mut [u8], swap: bool) {
    for (value, chunk) in src.iter().zip(dst.chunks_exact_mut(T::SIZE)) {
        value.write_ne(chunk);
        if swap {
            reverse_chunk(chunk);
        }
    }
}

// ============================================================================
// Sub-range conversions
// ============================================================================

/// Convert `count` scalars from `src[src_start..]` into bytes at `dst[dst_start..]`
///
/// Returns the number of bytes written (`count * T::SIZE`) so that repeated
/// calls can append to the same buffer.
pub fn scalars_to_bytes<T: Scalar>(
    src: &[T],
    src_start: usize,
    dst: &mut [u8],
    dst_start: usize,
    count: usize,
    order: ByteOrder,
) -> Result<usize> {
    if count == 0 {
        return Ok(0);
    }

    let src_range = checked_range(BufferSide::Source, src_start, count, 1, src.len())?;
    let dst_range = checked_range(
        BufferSide::Destination,
        dst_start,
        count,
        T::SIZE,
        dst.len(),
    )?;

    let swap = order.requires_swap();
    encode_into(&src[src_range], &mut dst[dst_range], swap);

    trace!(
        "Encoded {} x {} to bytes at {} ({}, swap={})",
        count,
        T::WIDTH,
        dst_start,
        order,
        swap
    );
    Ok(count * T::SIZE)
}

/// Convert `count` elements worth of bytes from `src[src_start..]` into `dst[dst_start..]`
///
/// Returns the number of elements written.
pub fn bytes_to_scalars<T: Scalar>(
    src: &[u8],
    src_start: usize,
    dst: &mut [T],
    dst_start: usize,
    count: usize,
    order: ByteOrder,
) -> Result<usize> {
    if count == 0 {
        return Ok(0);
    }

    let src_range = checked_range(BufferSide::Source, src_start, count, T::SIZE, src.len())?;
    let dst_range = checked_range(BufferSide::Destination, dst_start, count, 1, dst.len())?;

    let swap = order.requires_swap();
    let mut scratch = [0u8; MAX_SCALAR_SIZE];
    let scratch = &mut scratch[..T::SIZE];
    for (chunk, slot) in src[src_range]
        .chunks_exact(T::SIZE)
        .zip(dst[dst_range].iter_mut())
    {
        scratch.copy_from_slice(chunk);
        if swap {
            reverse_chunk(scratch);
        }
        *slot = T::read_ne(scratch);
    }

    trace!(
        "Decoded {} x {} from bytes at {} ({}, swap={})",
        count,
        T::WIDTH,
        src_start,
        order,
        swap
    );
    Ok(count)
}

// ============================================================================
// Whole-buffer conversions
// ============================================================================

/// Encode a whole sequence into a freshly allocated byte vector
pub fn to_bytes<T: Scalar>(src: &[T], order: ByteOrder) -> Vec<u8> {
    let mut out = vec![0u8; src.len() * T::SIZE];
    encode_into(src, &mut out, order.requires_swap());
    out
}

/// Decode a whole byte buffer into a vector of scalars
///
/// The buffer length must be a multiple of `T::SIZE`.
pub fn from_bytes<T: Scalar>(src: &[u8], order: ByteOrder) -> Result<Vec<T>> {
    let remainder = src.len() % T::SIZE;
    if remainder != 0 {
        debug!(
            "Refusing to decode {} bytes as {}: trailing {} byte(s)",
            src.len(),
            T::WIDTH,
            remainder
        );
        return Err(ConvertError::out_of_bounds(
            BufferSide::Source,
            src.len() - remainder,
            T::SIZE,
            src.len(),
        ));
    }

    let count = src.len() / T::SIZE;
    let mut out = vec![T::default(); count];
    bytes_to_scalars(src, 0, &mut out, 0, count, order)?;
    Ok(out)
}

/// Encode a single scalar
pub fn scalar_to_bytes<T: Scalar>(value: T, order: ByteOrder) -> Vec<u8> {
    to_bytes(&[value], order)
}

/// Decode a single scalar starting at `start`
pub fn bytes_to_scalar<T: Scalar>(src: &[u8], start: usize, order: ByteOrder) -> Result<T> {
    let mut out = [T::default()];
    bytes_to_scalars(src, start, &mut out, 0, 1, order)?;
    Ok(out[0])
}
