//! Staging buffer packing: tightly-packed source rows into pitch-aligned
//! destination rows.
//!
//! Source payloads store rows back to back with no padding, while staging
//! rows are pitch-aligned, so a per-row copy is required whenever the two
//! pitches differ. The driver only writes caller-owned memory; it issues
//! no device calls.

use crate::format::{PixelFormat, BLOCK_DIM};
use crate::layout::{SubresourceFootprint, SubresourceLayout};
use thiserror::Error;

/// Errors that can occur while packing a staging buffer.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The pixel format has no defined byte size (e.g. unrecognized).
    #[error("Pixel format {0:?} has no defined byte size")]
    UnsupportedFormat(PixelFormat),

    /// The caller-provided staging buffer cannot hold the planned layout.
    #[error("Staging buffer too small: required {required} bytes, got {actual} bytes")]
    StagingTooSmall { required: u64, actual: usize },

    /// The source payload ended before every planned row was read.
    #[error("Source payload too short: required {required} bytes, got {actual} bytes")]
    SourceExhausted { required: usize, actual: usize },

    /// A planned row pitch cannot hold the expanded 4-byte rows, meaning
    /// the layout was planned with a narrower format.
    #[error("Row pitch too small for expanded rows: required {required} bytes, got {actual} bytes")]
    RowPitchTooSmall { required: usize, actual: usize },
}

/// Packs a tightly-packed source payload into `staging` at the offsets
/// planned in `layout`.
///
/// The source is walked in the layout's order (slice-major, mip-minor),
/// which matches container payload order. `format` must be the format the
/// layout was planned with.
pub fn pack_staging(
    format: PixelFormat,
    layout: &SubresourceLayout,
    source: &[u8],
    staging: &mut [u8],
) -> Result<(), UploadError> {
    let bytes_per_unit = format.bytes_per_unit() as usize;
    if bytes_per_unit == 0 {
        return Err(UploadError::UnsupportedFormat(format));
    }
    check_staging_len(layout, staging)?;

    let block_compressed = format.is_block_compressed();
    let required: usize = layout
        .footprints
        .iter()
        .map(|f| {
            let (columns, rows) = encoded_dims(f, block_compressed);
            columns * bytes_per_unit * rows
        })
        .sum();
    if source.len() < required {
        return Err(UploadError::SourceExhausted {
            required,
            actual: source.len(),
        });
    }

    let mut cursor = 0usize;
    for footprint in &layout.footprints {
        let (columns, rows) = encoded_dims(footprint, block_compressed);
        let source_pitch = columns * bytes_per_unit;
        let base = footprint.offset as usize;
        let row_pitch = footprint.row_pitch as usize;

        for row in 0..rows {
            let dst = base + row * row_pitch;
            staging[dst..dst + source_pitch]
                .copy_from_slice(&source[cursor..cursor + source_pitch]);
            cursor += source_pitch;
        }
    }

    Ok(())
}

/// Packs a 24-bit RGB source payload into `staging`, expanding every pixel
/// to 4 bytes with an opaque alpha byte.
///
/// `layout` must have been planned with the 4-byte target format; the
/// expansion runs row-by-row against the destination row pitch, never the
/// source's tightly-packed pitch.
pub fn pack_staging_rgb24(
    layout: &SubresourceLayout,
    source: &[u8],
    staging: &mut [u8],
) -> Result<(), UploadError> {
    check_staging_len(layout, staging)?;

    let mut required = 0usize;
    for footprint in &layout.footprints {
        let expanded_pitch = footprint.width as usize * 4;
        if expanded_pitch > footprint.row_pitch as usize {
            return Err(UploadError::RowPitchTooSmall {
                required: expanded_pitch,
                actual: footprint.row_pitch as usize,
            });
        }
        required += footprint.width as usize * 3 * footprint.height as usize;
    }
    if source.len() < required {
        return Err(UploadError::SourceExhausted {
            required,
            actual: source.len(),
        });
    }

    let mut cursor = 0usize;
    for footprint in &layout.footprints {
        let pixels = footprint.width as usize;
        let source_pitch = pixels * 3;
        let base = footprint.offset as usize;
        let row_pitch = footprint.row_pitch as usize;

        for row in 0..footprint.height as usize {
            let dst = base + row * row_pitch;
            expand_rgb24_row(
                &source[cursor..cursor + source_pitch],
                &mut staging[dst..dst + pixels * 4],
            );
            cursor += source_pitch;
        }
    }

    Ok(())
}

/// Expands one row of 3-byte pixels into 4-byte pixels, copying the color
/// bytes unchanged and filling the fourth byte with opaque alpha.
#[inline]
pub fn expand_rgb24_row(source: &[u8], dest: &mut [u8]) {
    debug_assert_eq!(source.len() % 3, 0);
    debug_assert_eq!(dest.len(), source.len() / 3 * 4);

    for (src, dst) in source.chunks_exact(3).zip(dest.chunks_exact_mut(4)) {
        dst[..3].copy_from_slice(src);
        dst[3] = 0xFF;
    }
}

fn check_staging_len(layout: &SubresourceLayout, staging: &[u8]) -> Result<(), UploadError> {
    if (staging.len() as u64) < layout.total_size {
        return Err(UploadError::StagingTooSmall {
            required: layout.total_size,
            actual: staging.len(),
        });
    }
    Ok(())
}

/// Encoded columns and rows of a footprint: texel-blocks for compressed
/// formats, pixels otherwise.
#[inline]
fn encoded_dims(footprint: &SubresourceFootprint, block_compressed: bool) -> (usize, usize) {
    if block_compressed {
        (
            (footprint.width / BLOCK_DIM) as usize,
            (footprint.height / BLOCK_DIM) as usize,
        )
    } else {
        (footprint.width as usize, footprint.height as usize)
    }
}
