// Centralized ingestion limits to harden against untrusted uploads

// 8 MB worth of characters in the document text
pub const MAX_SVG_BYTES: usize = 8 * 1024 * 1024;

// Regions kept per document; each one becomes a live DOM element
pub const MAX_SHAPES: usize = 200_000;

#[inline]
pub fn in_size_bounds(len: usize) -> bool { len <= MAX_SVG_BYTES }

#[inline]
pub fn in_shape_bounds(count: usize) -> bool { count <= MAX_SHAPES }
