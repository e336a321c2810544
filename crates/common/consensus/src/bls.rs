use alloy_primitives::FixedBytes;

use crate::constants::BYTES_PER_SIGNATURE;

pub type BLSSignature = FixedBytes<BYTES_PER_SIGNATURE>;
