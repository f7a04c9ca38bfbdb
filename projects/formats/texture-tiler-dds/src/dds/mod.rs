/// Shared constants between modules.
pub mod constants;

/// Map legacy pixel-format descriptions to canonical formats.
pub mod pixel_format;

/// Parse the container headers into a normalized descriptor.
pub mod parse_header;

pub use parse_header::*;
pub use pixel_format::*;
