//! Normalized texture shape description.

use crate::format::PixelFormat;

/// Normalized description of a texture resource, as produced by a
/// container header parser.
///
/// Invariants: `width * height * depth > 0`; `array_size` is 1 for a plain
/// texture, 6 for a cubemap, or an explicit array length; `mip_levels >= 1`.
/// A stated mip count beyond `max_mip_levels()` is tolerated: the planner
/// clamps the chain to that bound and the degenerate-mip collapse absorbs
/// the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureDescriptor {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub array_size: u32,
    pub mip_levels: u32,
    pub format: PixelFormat,
}

impl TextureDescriptor {
    /// Number of array slices a cubemap carries.
    pub const CUBEMAP_SLICES: u32 = 6;

    /// Returns whether this descriptor describes a cubemap.
    #[inline]
    pub fn is_cubemap(&self) -> bool {
        self.array_size == Self::CUBEMAP_SLICES
    }

    /// The longest mip chain these dimensions can carry:
    /// `floor(log2(max(width, height))) + 1`.
    #[inline]
    pub fn max_mip_levels(&self) -> u32 {
        let largest = self.width.max(self.height).max(1);
        32 - largest.leading_zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(1, 1, 1)]
    #[case(2, 2, 2)]
    #[case(64, 64, 7)]
    #[case(256, 64, 9)]
    #[case(17, 13, 5)]
    fn max_mip_levels_follows_log2_of_largest_dimension(
        #[case] width: u32,
        #[case] height: u32,
        #[case] expected: u32,
    ) {
        let descriptor = TextureDescriptor {
            width,
            height,
            depth: 1,
            array_size: 1,
            mip_levels: 1,
            format: PixelFormat::RGBA8888,
        };
        assert_eq!(descriptor.max_mip_levels(), expected);
    }

    #[test]
    fn cubemap_is_six_slices() {
        let descriptor = TextureDescriptor {
            width: 16,
            height: 16,
            depth: 1,
            array_size: 6,
            mip_levels: 1,
            format: PixelFormat::BC1,
        };
        assert!(descriptor.is_cubemap());
    }
}
