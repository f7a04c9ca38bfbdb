//! Subresource layout planning for tiled texture uploads.
//!
//! Turns a [`TextureDescriptor`] into an ordered sequence of
//! [`SubresourceFootprint`]s under the device's row-pitch and placement
//! alignment rules. This is pure arithmetic; no device call is made here.

use crate::descriptor::TextureDescriptor;
use crate::format::{PixelFormat, BLOCK_DIM};
use alloc::vec::Vec;
use thiserror::Error;

/// Alignment rules a device imposes on a staging layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConstraints {
    /// Every row pitch is rounded up to a multiple of this.
    pub row_pitch_alignment: u32,
    /// The first footprint of every array slice starts at a multiple of this.
    pub base_placement_alignment: u32,
    /// When set, every footprint (not just the first of a slice) is placed
    /// at a multiple of `base_placement_alignment`.
    pub per_subresource_alignment: bool,
}

impl LayoutConstraints {
    /// The D3D12 texture data alignment rules
    /// (`D3D12_TEXTURE_DATA_PITCH_ALIGNMENT` / `D3D12_TEXTURE_DATA_PLACEMENT_ALIGNMENT`).
    pub const D3D12: LayoutConstraints = LayoutConstraints {
        row_pitch_alignment: 256,
        base_placement_alignment: 512,
        per_subresource_alignment: false,
    };
}

/// Geometric and byte description of one mip level of one array slice
/// within a staging buffer.
///
/// `width`/`height` are rounded up to block granularity for compressed
/// formats, so they always describe whole encoded rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubresourceFootprint {
    pub array_slice: u32,
    pub mip_level: u32,
    pub width: u32,
    pub height: u32,
    /// Aligned byte distance between the starts of consecutive rows.
    pub row_pitch: u32,
    /// Byte offset of this subresource within the staging buffer.
    pub offset: u64,
    /// Total byte size of this subresource (`row_pitch` × encoded rows).
    pub size: u64,
}

/// Ordered staging plan for a whole texture: slice-major, mip-minor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubresourceLayout {
    pub footprints: Vec<SubresourceFootprint>,
    /// Total staging bytes required, including alignment padding.
    pub total_size: u64,
    /// Mip levels actually emitted per slice. Degenerate levels are
    /// collapsed, so this may be smaller than the descriptor's stated
    /// count; the emitted count wins.
    pub mips_per_slice: u32,
}

/// Errors that can occur while planning a subresource layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The pixel format has no defined byte size (e.g. unrecognized).
    #[error("Pixel format {0:?} has no defined byte size")]
    UnsupportedFormat(PixelFormat),

    /// A mip level came out with a zero dimension.
    #[error("Invalid dimensions {width}x{height} at mip {mip}")]
    InvalidDimensions { mip: u32, width: u32, height: u32 },

    /// An alignment constraint was zero.
    #[error("Alignment constraints must be non-zero: row pitch {row_pitch_alignment}, base placement {base_placement_alignment}")]
    InvalidAlignment {
        row_pitch_alignment: u32,
        base_placement_alignment: u32,
    },
}

/// Geometry of one emitted mip level, shared by every slice.
#[derive(Debug, Clone, Copy)]
struct MipGeometry {
    mip_level: u32,
    width: u32,
    height: u32,
    row_pitch: u32,
    size: u64,
}

/// Computes, per array slice and mip level, the destination offset, row
/// pitch and dimensions for a staging upload of `descriptor`.
///
/// Mip 0 takes the descriptor dimensions; each following level halves them
/// with a floor of 1. The stated mip count is clamped to the dimensions'
/// longest chain before planning, so an oversized header count cannot
/// drive allocation. Levels whose footprint stops shrinking (possible for
/// block-compressed formats once a dimension drops below the 4×4 block,
/// and for any format once both dimensions reach 1) are skipped and the
/// emitted mip count shrinks accordingly. All slices of one descriptor
/// share dimensions, so the collapse applies uniformly.
///
/// Offsets accumulate in slice-major, mip-minor order. Each slice's first
/// footprint is aligned to
/// [`base_placement_alignment`](LayoutConstraints::base_placement_alignment);
/// consecutive mips of one slice accumulate without re-alignment unless
/// [`per_subresource_alignment`](LayoutConstraints::per_subresource_alignment)
/// is set.
pub fn plan_subresource_layout(
    descriptor: &TextureDescriptor,
    constraints: &LayoutConstraints,
) -> Result<SubresourceLayout, LayoutError> {
    if constraints.row_pitch_alignment == 0 || constraints.base_placement_alignment == 0 {
        return Err(LayoutError::InvalidAlignment {
            row_pitch_alignment: constraints.row_pitch_alignment,
            base_placement_alignment: constraints.base_placement_alignment,
        });
    }
    if descriptor.format.bytes_per_unit() == 0 {
        return Err(LayoutError::UnsupportedFormat(descriptor.format));
    }

    let mips = plan_mip_chain(descriptor, constraints)?;
    let mips_per_slice = mips.len() as u32;
    let base_alignment = constraints.base_placement_alignment as u64;

    let mut footprints = Vec::with_capacity(mips.len() * descriptor.array_size as usize);
    let mut offset = 0u64;
    for array_slice in 0..descriptor.array_size {
        // Each slice region starts placement-aligned; devices place
        // per-slice copy sources on these boundaries.
        offset = offset.next_multiple_of(base_alignment);
        for mip in &mips {
            if constraints.per_subresource_alignment {
                offset = offset.next_multiple_of(base_alignment);
            }
            footprints.push(SubresourceFootprint {
                array_slice,
                mip_level: mip.mip_level,
                width: mip.width,
                height: mip.height,
                row_pitch: mip.row_pitch,
                offset,
                size: mip.size,
            });
            offset += mip.size;
        }
    }

    Ok(SubresourceLayout {
        footprints,
        total_size: offset,
        mips_per_slice,
    })
}

/// Computes the emitted mip chain for slice 0, applying the
/// degenerate-mip collapse.
fn plan_mip_chain(
    descriptor: &TextureDescriptor,
    constraints: &LayoutConstraints,
) -> Result<Vec<MipGeometry>, LayoutError> {
    let block_compressed = descriptor.format.is_block_compressed();
    let bytes_per_unit = descriptor.format.bytes_per_unit();

    // A stated count beyond the dimensions' longest chain is header noise;
    // every level past it would collapse anyway, so clamp before sizing
    // anything from it.
    let mip_levels = descriptor.mip_levels.clamp(1, descriptor.max_mip_levels());

    let mut mips = Vec::with_capacity(mip_levels as usize);
    let mut width = descriptor.width;
    let mut height = descriptor.height;
    let mut prev_footprint = (0u32, 0u32);
    let mut emitted = 0u32;

    for _ in 0..mip_levels {
        // The floor-at-1 halving below cannot produce zero; this only
        // fires for a malformed descriptor.
        if width == 0 || height == 0 {
            return Err(LayoutError::InvalidDimensions {
                mip: emitted,
                width,
                height,
            });
        }

        // Block rounding and pitch math below use checked ops: dimensions
        // near u32::MAX come straight from an untrusted header and must
        // surface as an error, not wrap.
        let footprint = if block_compressed {
            match (
                width.checked_next_multiple_of(BLOCK_DIM),
                height.checked_next_multiple_of(BLOCK_DIM),
            ) {
                (Some(w), Some(h)) => (w, h),
                _ => {
                    return Err(LayoutError::InvalidDimensions {
                        mip: emitted,
                        width,
                        height,
                    })
                }
            }
        } else {
            (width, height)
        };

        // Degenerate-mip collapse: once halving no longer changes the
        // footprint, the level is skipped and the emitted count shrinks.
        if emitted > 0 && footprint == prev_footprint {
            width = (width / 2).max(1);
            height = (height / 2).max(1);
            continue;
        }

        let block_columns = if block_compressed {
            footprint.0 / BLOCK_DIM
        } else {
            footprint.0
        };
        let block_rows = if block_compressed {
            footprint.1 / BLOCK_DIM
        } else {
            footprint.1
        };

        let row_pitch = block_columns
            .checked_mul(bytes_per_unit)
            .and_then(|bytes| bytes.checked_next_multiple_of(constraints.row_pitch_alignment))
            .ok_or(LayoutError::InvalidDimensions {
                mip: emitted,
                width,
                height,
            })?;

        mips.push(MipGeometry {
            mip_level: emitted,
            width: footprint.0,
            height: footprint.1,
            row_pitch,
            size: row_pitch as u64 * block_rows as u64,
        });

        prev_footprint = footprint;
        emitted += 1;
        width = (width / 2).max(1);
        height = (height / 2).max(1);
    }

    Ok(mips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn descriptor(
        width: u32,
        height: u32,
        array_size: u32,
        mip_levels: u32,
        format: PixelFormat,
    ) -> TextureDescriptor {
        TextureDescriptor {
            width,
            height,
            depth: 1,
            array_size,
            mip_levels,
            format,
        }
    }

    #[test]
    fn single_block_mip_rounds_pitch_to_alignment() {
        // One 4x4 BC3 block is 16 raw bytes; the pitch rounds up to 256.
        let layout = plan_subresource_layout(
            &descriptor(4, 4, 1, 1, PixelFormat::BC3),
            &LayoutConstraints::D3D12,
        )
        .unwrap();

        assert_eq!(layout.footprints.len(), 1);
        let footprint = layout.footprints[0];
        assert_eq!(footprint.row_pitch, 256);
        assert_eq!(footprint.size, 256);
        assert_eq!(layout.total_size, 256);
        assert_eq!(layout.mips_per_slice, 1);
    }

    #[test]
    fn excess_mip_count_collapses_to_emitted() {
        // 16x16 BC1 with 5 stated mips: the 2x2 and 1x1 levels share the
        // 4x4 block footprint of mip 2 and are collapsed away.
        let layout = plan_subresource_layout(
            &descriptor(16, 16, 1, 5, PixelFormat::BC1),
            &LayoutConstraints::D3D12,
        )
        .unwrap();

        assert_eq!(layout.mips_per_slice, 3);
        let dims: Vec<(u32, u32, u32)> = layout
            .footprints
            .iter()
            .map(|f| (f.mip_level, f.width, f.height))
            .collect();
        assert_eq!(dims, vec![(0, 16, 16), (1, 8, 8), (2, 4, 4)]);
        // 4 block rows * 256 + 2 * 256 + 1 * 256
        assert_eq!(layout.total_size, 1024 + 512 + 256);
    }

    #[test]
    fn linear_chain_emits_every_level_down_to_one() {
        let layout = plan_subresource_layout(
            &descriptor(64, 64, 1, 7, PixelFormat::RGBA8888),
            &LayoutConstraints::D3D12,
        )
        .unwrap();

        assert_eq!(layout.mips_per_slice, 7);
        let widths: Vec<u32> = layout.footprints.iter().map(|f| f.width).collect();
        assert_eq!(widths, vec![64, 32, 16, 8, 4, 2, 1]);
    }

    #[rstest]
    #[case(256, 256, PixelFormat::BC1)]
    #[case(17, 13, PixelFormat::BC1)]
    #[case(64, 16, PixelFormat::BC7)]
    #[case(100, 7, PixelFormat::RGBA8888)]
    #[case(1, 1, PixelFormat::A8)]
    fn emitted_dimensions_strictly_decrease(
        #[case] width: u32,
        #[case] height: u32,
        #[case] format: PixelFormat,
    ) {
        let desc = descriptor(width, height, 1, 16, format);
        let layout = plan_subresource_layout(&desc, &LayoutConstraints::D3D12).unwrap();

        for pair in layout.footprints.windows(2) {
            // No two consecutive emitted mips may share dimensions, and
            // each level fits within the previous one.
            assert_ne!(
                (pair[0].width, pair[0].height),
                (pair[1].width, pair[1].height)
            );
            assert!(pair[1].width <= pair[0].width);
            assert!(pair[1].height <= pair[0].height);
        }
    }

    #[rstest]
    #[case(256)]
    #[case(128)]
    #[case(64)]
    #[case(1)]
    fn row_pitch_is_aligned_and_at_least_minimum(#[case] row_pitch_alignment: u32) {
        let constraints = LayoutConstraints {
            row_pitch_alignment,
            base_placement_alignment: 512,
            per_subresource_alignment: false,
        };
        let desc = descriptor(67, 43, 1, 4, PixelFormat::BC1);
        let layout = plan_subresource_layout(&desc, &constraints).unwrap();

        for footprint in &layout.footprints {
            assert_eq!(footprint.row_pitch % row_pitch_alignment, 0);
            let minimum = (footprint.width / 4) * 8;
            assert!(footprint.row_pitch >= minimum);
        }
    }

    #[test]
    fn cubemap_slices_start_placement_aligned() {
        // One BC1 4x4 mip is 256 staged bytes, so every following slice
        // has to be pushed up to the 512-byte placement boundary.
        let layout = plan_subresource_layout(
            &descriptor(4, 4, 6, 1, PixelFormat::BC1),
            &LayoutConstraints::D3D12,
        )
        .unwrap();

        assert_eq!(layout.footprints.len(), 6);
        let offsets: Vec<u64> = layout.footprints.iter().map(|f| f.offset).collect();
        assert_eq!(offsets, vec![0, 512, 1024, 1536, 2048, 2560]);
        assert_eq!(layout.total_size, 2560 + 256);
    }

    #[test]
    fn per_subresource_alignment_realigns_every_mip() {
        let constraints = LayoutConstraints {
            row_pitch_alignment: 16,
            base_placement_alignment: 256,
            per_subresource_alignment: true,
        };
        let desc = descriptor(3, 3, 1, 2, PixelFormat::RGBA8888);
        let layout = plan_subresource_layout(&desc, &constraints).unwrap();

        // Mip 0: pitch 16, 3 rows = 48 bytes; mip 1 is pushed to 256.
        assert_eq!(layout.footprints[0].offset, 0);
        assert_eq!(layout.footprints[0].size, 48);
        assert_eq!(layout.footprints[1].offset, 256);
    }

    #[test]
    fn mips_accumulate_without_realignment_by_default() {
        let constraints = LayoutConstraints {
            row_pitch_alignment: 16,
            base_placement_alignment: 256,
            per_subresource_alignment: false,
        };
        let desc = descriptor(3, 3, 1, 2, PixelFormat::RGBA8888);
        let layout = plan_subresource_layout(&desc, &constraints).unwrap();

        assert_eq!(layout.footprints[1].offset, 48);
        assert_eq!(layout.total_size, 48 + 16);
    }

    #[test]
    fn absurd_mip_count_is_clamped_before_planning() {
        // A hostile header can state any 32-bit mip count; the chain is
        // clamped to what the dimensions can carry before any allocation
        // is sized from it, and the collapse rules still apply.
        let layout = plan_subresource_layout(
            &descriptor(16, 16, 1, u32::MAX, PixelFormat::BC1),
            &LayoutConstraints::D3D12,
        )
        .unwrap();

        assert_eq!(layout.mips_per_slice, 3);
        assert_eq!(layout.total_size, 1024 + 512 + 256);
    }

    #[rstest]
    #[case(u32::MAX - 2, 4, PixelFormat::BC1)]
    #[case(4, u32::MAX - 1, PixelFormat::BC3)]
    #[case(u32::MAX, 1, PixelFormat::RGBA8888)]
    fn near_max_dimensions_error_instead_of_wrapping(
        #[case] width: u32,
        #[case] height: u32,
        #[case] format: PixelFormat,
    ) {
        let result = plan_subresource_layout(
            &descriptor(width, height, 1, 1, format),
            &LayoutConstraints::D3D12,
        );
        assert!(matches!(
            result,
            Err(LayoutError::InvalidDimensions { mip: 0, .. })
        ));
    }

    #[test]
    fn zero_width_is_rejected() {
        let result = plan_subresource_layout(
            &descriptor(0, 64, 1, 1, PixelFormat::BC1),
            &LayoutConstraints::D3D12,
        );
        assert!(matches!(
            result,
            Err(LayoutError::InvalidDimensions { mip: 0, .. })
        ));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let result = plan_subresource_layout(
            &descriptor(64, 64, 1, 1, PixelFormat::Unknown),
            &LayoutConstraints::D3D12,
        );
        assert!(matches!(
            result,
            Err(LayoutError::UnsupportedFormat(PixelFormat::Unknown))
        ));
    }

    #[test]
    fn zero_alignment_is_rejected() {
        let constraints = LayoutConstraints {
            row_pitch_alignment: 0,
            base_placement_alignment: 512,
            per_subresource_alignment: false,
        };
        let result =
            plan_subresource_layout(&descriptor(4, 4, 1, 1, PixelFormat::BC1), &constraints);
        assert!(matches!(result, Err(LayoutError::InvalidAlignment { .. })));
    }
}
