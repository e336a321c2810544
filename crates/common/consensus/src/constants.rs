/// Length of a KZG commitment in bytes.
pub const BYTES_PER_COMMITMENT: usize = 48;

/// Length of a KZG proof in bytes.
pub const BYTES_PER_PROOF: usize = 48;

/// Length of a BLS signature in bytes.
pub const BYTES_PER_SIGNATURE: usize = 96;

/// Length of a blob payload in bytes.
pub const BYTES_PER_BLOB: usize = 131072;

/// Maximum number of blob sidecars that can be included in a single block.
pub const MAX_BLOBS_PER_BLOCK: usize = 6;
