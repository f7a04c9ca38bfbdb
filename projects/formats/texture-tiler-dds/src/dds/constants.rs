//! DDS format constants and definitions
#![allow(dead_code)]

/// Magic header for DDS files
pub(crate) const DDS_MAGIC: u32 = 0x44445320_u32.to_be();

// Size of the regular DDS header
pub(crate) const DDS_HEADER_SIZE: usize = 0x80;
pub(crate) const DX10_HEADER_SIZE: usize = 20;

// DDS header field offsets
pub(crate) const DDS_FLAGS_OFFSET: usize = 0x08;
pub(crate) const DDS_HEIGHT_OFFSET: usize = 0x0C;
pub(crate) const DDS_WIDTH_OFFSET: usize = 0x10;
pub(crate) const DDS_DEPTH_OFFSET: usize = 0x18;
pub(crate) const DDS_MIPMAP_COUNT_OFFSET: usize = 0x1C;
pub(crate) const DDS_CAPS2_OFFSET: usize = 0x70;

// DDS pixel format offsets (within the 32-byte DDSPIXELFORMAT structure at offset 0x4C)
pub(crate) const DDS_PIXELFORMAT_OFFSET: usize = 0x4C;
pub(crate) const DDS_PIXELFORMAT_FLAGS_OFFSET: usize = 0x50;
pub(crate) const FOURCC_OFFSET: usize = 0x54;
pub(crate) const DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET: usize = 0x58;
pub(crate) const DDS_PIXELFORMAT_RBITMASK_OFFSET: usize = 0x5C;
pub(crate) const DDS_PIXELFORMAT_GBITMASK_OFFSET: usize = 0x60;
pub(crate) const DDS_PIXELFORMAT_BBITMASK_OFFSET: usize = 0x64;
pub(crate) const DDS_PIXELFORMAT_ABITMASK_OFFSET: usize = 0x68;

// DX10 extended header field offsets
pub(crate) const DX10_FORMAT_OFFSET: usize = 0x80;
pub(crate) const DX10_RESOURCE_DIMENSION_OFFSET: usize = 0x84;
pub(crate) const DX10_MISC_FLAG_OFFSET: usize = 0x88;
pub(crate) const DX10_ARRAY_SIZE_OFFSET: usize = 0x8C;
pub(crate) const DX10_RESERVED_OFFSET: usize = 0x90;

// DDS header flags
pub(crate) const DDSD_CAPS: u32 = 0x1;
pub(crate) const DDSD_HEIGHT: u32 = 0x2;
pub(crate) const DDSD_WIDTH: u32 = 0x4;
pub(crate) const DDSD_PIXELFORMAT: u32 = 0x1000;
pub(crate) const DDSD_MIPMAPCOUNT: u32 = 0x20000;
pub(crate) const DDSD_LINEARSIZE: u32 = 0x80000;

// DDS pixel format flags
pub(crate) const DDPF_ALPHAPIXELS: u32 = 0x1;
pub(crate) const DDPF_ALPHA: u32 = 0x2;
pub(crate) const DDPF_FOURCC: u32 = 0x4;
pub(crate) const DDPF_RGB: u32 = 0x40;
pub(crate) const DDPF_YUV: u32 = 0x200;
pub(crate) const DDPF_LUMINANCE: u32 = 0x20000;

// Caps2 cubemap bits: DDSCAPS2_CUBEMAP plus all six face-present bits.
pub(crate) const DDSCAPS2_CUBEMAP_ALLFACES: u32 = 0xFE00;

// FourCC codes selecting block-compressed families
pub(crate) const FOURCC_DXT1: u32 = 0x31545844_u32.to_le(); // 'DXT1'
pub(crate) const FOURCC_DXT2: u32 = 0x32545844_u32.to_le(); // 'DXT2'
pub(crate) const FOURCC_DXT3: u32 = 0x33545844_u32.to_le(); // 'DXT3'
pub(crate) const FOURCC_DXT4: u32 = 0x34545844_u32.to_le(); // 'DXT4'
pub(crate) const FOURCC_DXT5: u32 = 0x35545844_u32.to_le(); // 'DXT5'
pub(crate) const FOURCC_BC4U: u32 = 0x55344342_u32.to_le(); // 'BC4U'
pub(crate) const FOURCC_BC4S: u32 = 0x53344342_u32.to_le(); // 'BC4S'
pub(crate) const FOURCC_ATI2: u32 = 0x32495441_u32.to_le(); // 'ATI2'
pub(crate) const FOURCC_BC5S: u32 = 0x53354342_u32.to_le(); // 'BC5S'

/// Sentinel fourCC selecting the extended (DX10) header variant.
pub(crate) const FOURCC_DX10: u32 = 0x30315844_u32.to_le(); // 'DX10'

// Legacy numeric D3DFMT codes stored in the fourCC field by old writers
pub(crate) const D3DFMT_A16B16G16R16: u32 = 36;
pub(crate) const D3DFMT_Q16W16V16U16: u32 = 110;
pub(crate) const D3DFMT_R16F: u32 = 111;
pub(crate) const D3DFMT_G16R16F: u32 = 112;
pub(crate) const D3DFMT_A16B16G16R16F: u32 = 113;
pub(crate) const D3DFMT_R32F: u32 = 114;
pub(crate) const D3DFMT_G32R32F: u32 = 115;
pub(crate) const D3DFMT_A32B32G32R32F: u32 = 116;

// DXGI format constants for the DX10 extended header
pub(crate) const DXGI_FORMAT_R32G32B32A32_FLOAT: u32 = 2_u32.to_le();
pub(crate) const DXGI_FORMAT_R16G16B16A16_FLOAT: u32 = 10_u32.to_le();
pub(crate) const DXGI_FORMAT_R16G16B16A16_UNORM: u32 = 11_u32.to_le();
pub(crate) const DXGI_FORMAT_R16G16B16A16_SNORM: u32 = 13_u32.to_le();
pub(crate) const DXGI_FORMAT_R32G32_FLOAT: u32 = 16_u32.to_le();
pub(crate) const DXGI_FORMAT_R10G10B10A2_UNORM: u32 = 24_u32.to_le();

pub(crate) const DXGI_FORMAT_R8G8B8A8_TYPELESS: u32 = 27_u32.to_le();
pub(crate) const DXGI_FORMAT_R8G8B8A8_UNORM: u32 = 28_u32.to_le();
pub(crate) const DXGI_FORMAT_R8G8B8A8_UNORM_SRGB: u32 = 29_u32.to_le();
pub(crate) const DXGI_FORMAT_R8G8B8A8_UINT: u32 = 30_u32.to_le();
pub(crate) const DXGI_FORMAT_R8G8B8A8_SNORM: u32 = 31_u32.to_le();
pub(crate) const DXGI_FORMAT_R8G8B8A8_SINT: u32 = 32_u32.to_le();

pub(crate) const DXGI_FORMAT_R16G16_FLOAT: u32 = 34_u32.to_le();
pub(crate) const DXGI_FORMAT_R16G16_UNORM: u32 = 35_u32.to_le();
pub(crate) const DXGI_FORMAT_R32_FLOAT: u32 = 41_u32.to_le();
pub(crate) const DXGI_FORMAT_R16_FLOAT: u32 = 54_u32.to_le();
pub(crate) const DXGI_FORMAT_A8_UNORM: u32 = 65_u32.to_le();

pub(crate) const DXGI_FORMAT_BC1_TYPELESS: u32 = 70_u32.to_le();
pub(crate) const DXGI_FORMAT_BC1_UNORM: u32 = 71_u32.to_le();
pub(crate) const DXGI_FORMAT_BC1_UNORM_SRGB: u32 = 72_u32.to_le();

pub(crate) const DXGI_FORMAT_BC2_TYPELESS: u32 = 73_u32.to_le();
pub(crate) const DXGI_FORMAT_BC2_UNORM: u32 = 74_u32.to_le();
pub(crate) const DXGI_FORMAT_BC2_UNORM_SRGB: u32 = 75_u32.to_le();

pub(crate) const DXGI_FORMAT_BC3_TYPELESS: u32 = 76_u32.to_le();
pub(crate) const DXGI_FORMAT_BC3_UNORM: u32 = 77_u32.to_le();
pub(crate) const DXGI_FORMAT_BC3_UNORM_SRGB: u32 = 78_u32.to_le();

pub(crate) const DXGI_FORMAT_BC4_TYPELESS: u32 = 79_u32.to_le();
pub(crate) const DXGI_FORMAT_BC4_UNORM: u32 = 80_u32.to_le();
pub(crate) const DXGI_FORMAT_BC4_SNORM: u32 = 81_u32.to_le();

pub(crate) const DXGI_FORMAT_BC5_TYPELESS: u32 = 82_u32.to_le();
pub(crate) const DXGI_FORMAT_BC5_UNORM: u32 = 83_u32.to_le();
pub(crate) const DXGI_FORMAT_BC5_SNORM: u32 = 84_u32.to_le();

pub(crate) const DXGI_FORMAT_B5G6R5_UNORM: u32 = 85_u32.to_le();
pub(crate) const DXGI_FORMAT_B5G5R5A1_UNORM: u32 = 86_u32.to_le();
pub(crate) const DXGI_FORMAT_B8G8R8A8_UNORM: u32 = 87_u32.to_le();
pub(crate) const DXGI_FORMAT_B8G8R8A8_TYPELESS: u32 = 90_u32.to_le();
pub(crate) const DXGI_FORMAT_B8G8R8A8_UNORM_SRGB: u32 = 91_u32.to_le();

pub(crate) const DXGI_FORMAT_BC6H_TYPELESS: u32 = 94_u32.to_le();
pub(crate) const DXGI_FORMAT_BC6H_UF16: u32 = 95_u32.to_le();
pub(crate) const DXGI_FORMAT_BC6H_SF16: u32 = 96_u32.to_le();

pub(crate) const DXGI_FORMAT_BC7_TYPELESS: u32 = 97_u32.to_le();
pub(crate) const DXGI_FORMAT_BC7_UNORM: u32 = 98_u32.to_le();
pub(crate) const DXGI_FORMAT_BC7_UNORM_SRGB: u32 = 99_u32.to_le();

// Legacy uncompressed red-channel bit masks (the original loader keys its
// bit-mask table on the red mask alone)
pub(crate) const RMASK_RGBA8888: u32 = 0x0000_00FF;
pub(crate) const RMASK_BGRA8888: u32 = 0x00FF_0000;
pub(crate) const RMASK_RG16: u32 = 0x0000_FFFF;
pub(crate) const RMASK_RGB10A2: u32 = 0x0000_03FF;
pub(crate) const RMASK_BGR5A1: u32 = 0x0000_7C00;
pub(crate) const RMASK_B5G6R5: u32 = 0x0000_F800;
pub(crate) const RMASK_ALPHA_ONLY: u32 = 0x0000_0000;
