//! Canonical pixel format identifiers and their byte-size classification.

/// Texel block dimension shared by every block-compressed format.
///
/// A block always encodes a 4×4 texel area regardless of its byte size.
pub const BLOCK_DIM: u32 = 4;

/// Defines a canonical pixel encoding for a texture payload.
///
/// Block-compressed variants encode a 4×4 texel block per unit; the
/// remaining variants encode one pixel per unit. [`Unknown`] is not an
/// error by itself, but callers must treat it as a terminal load failure
/// for the asset (its byte size reports as 0).
///
/// [`Unknown`]: PixelFormat::Unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PixelFormat {
    /// The pixel encoding could not be recognized.
    Unknown = 0,
    /// a.k.a. DXT1
    BC1,
    /// a.k.a. DXT2/3
    BC2,
    /// a.k.a. DXT4/5
    BC3,
    BC4,
    BC4Signed,
    /// a.k.a. ATI2
    BC5,
    BC5Signed,
    /// High-dynamic-range block compression (unsigned and signed halves).
    BC6H,
    BC7,
    /// R8G8B8A8_UNORM (32-bit with alpha)
    RGBA8888,
    /// B8G8R8A8_UNORM (32-bit with alpha, different byte order)
    BGRA8888,
    /// R16G16_UNORM
    RG16,
    /// R10G10B10A2_UNORM
    RGB10A2,
    /// B5G5R5A1_UNORM
    BGR5A1,
    /// B5G6R5_UNORM
    B5G6R5,
    /// A8_UNORM (alpha-only)
    A8,
    /// R16G16B16A16_UNORM
    RGBA16,
    /// R16G16B16A16_SNORM
    RGBA16Signed,
    /// R16G16B16A16_FLOAT
    RGBA16Float,
    /// R16_FLOAT
    R16Float,
    /// R16G16_FLOAT
    RG16Float,
    /// R32_FLOAT
    R32Float,
    /// R32G32_FLOAT
    RG32Float,
    /// R32G32B32A32_FLOAT
    RGBA32Float,
}

impl PixelFormat {
    /// Returns whether this format encodes 4×4 texel blocks rather than
    /// individual pixels.
    #[inline]
    pub fn is_block_compressed(&self) -> bool {
        matches!(
            self,
            PixelFormat::BC1
                | PixelFormat::BC2
                | PixelFormat::BC3
                | PixelFormat::BC4
                | PixelFormat::BC4Signed
                | PixelFormat::BC5
                | PixelFormat::BC5Signed
                | PixelFormat::BC6H
                | PixelFormat::BC7
        )
    }

    /// Returns the byte size of one encoded unit.
    ///
    /// For block-compressed formats this is the byte size of a 4×4 block
    /// (8 for the 4-bit-per-pixel families, 16 for the 8-bit-per-pixel and
    /// HDR families); for everything else it is bytes per pixel.
    /// [`PixelFormat::Unknown`] yields 0 and must short-circuit callers.
    #[inline]
    pub fn bytes_per_unit(&self) -> u32 {
        match self {
            PixelFormat::BC1 | PixelFormat::BC4 | PixelFormat::BC4Signed => 8,

            PixelFormat::BC2
            | PixelFormat::BC3
            | PixelFormat::BC5
            | PixelFormat::BC5Signed
            | PixelFormat::BC6H
            | PixelFormat::BC7 => 16,

            PixelFormat::A8 => 1,

            PixelFormat::BGR5A1 | PixelFormat::B5G6R5 | PixelFormat::R16Float => 2,

            PixelFormat::RGBA8888
            | PixelFormat::BGRA8888
            | PixelFormat::RG16
            | PixelFormat::RGB10A2
            | PixelFormat::RG16Float
            | PixelFormat::R32Float => 4,

            PixelFormat::RGBA16
            | PixelFormat::RGBA16Signed
            | PixelFormat::RGBA16Float
            | PixelFormat::RG32Float => 8,

            PixelFormat::RGBA32Float => 16,

            PixelFormat::Unknown => 0,
        }
    }
}
