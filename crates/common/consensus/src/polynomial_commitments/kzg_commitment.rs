use alloy_primitives::FixedBytes;

use crate::constants::BYTES_PER_COMMITMENT;

pub type KZGCommitment = FixedBytes<BYTES_PER_COMMITMENT>;
