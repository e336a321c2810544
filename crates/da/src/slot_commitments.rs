use alder_consensus::{
    constants::{BYTES_PER_COMMITMENT, MAX_BLOBS_PER_BLOCK},
    polynomial_commitments::kzg_commitment::KZGCommitment,
};

use crate::errors::SlotCommitmentsError;

/// Key of the per-slot commitment index record. A short ASCII literal
/// cannot collide with a real commitment key, which is always exactly
/// [`BYTES_PER_COMMITMENT`] bytes.
pub const SLOT_COMMITMENTS_KEY: &[u8] = b"slot_commitments";

/// Ordered list of KZG commitments recorded for one slot.
///
/// Stored so the blobs of a slot can be read back without scanning: the
/// index record is the sole source of truth for which commitments exist
/// for a slot.
///
/// Encoding is one count byte followed by the concatenated fixed-size
/// commitments. The count byte could hold up to 255; both directions cap
/// it at [`MAX_BLOBS_PER_BLOCK`] rather than trusting the protocol-level
/// limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotCommitments {
    pub commitments: Vec<KZGCommitment>,
}

impl SlotCommitments {
    pub fn encode(&self) -> Result<Vec<u8>, SlotCommitmentsError> {
        let count = self.commitments.len();
        if count > MAX_BLOBS_PER_BLOCK {
            return Err(SlotCommitmentsError::TooManyCommitments {
                count,
                max: MAX_BLOBS_PER_BLOCK,
            });
        }

        let mut encoded = Vec::with_capacity(1 + count * BYTES_PER_COMMITMENT);
        encoded.push(count as u8);
        for commitment in &self.commitments {
            encoded.extend_from_slice(commitment.as_slice());
        }
        Ok(encoded)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SlotCommitmentsError> {
        let (count, body) = bytes
            .split_first()
            .ok_or(SlotCommitmentsError::MissingCount)?;
        let count = *count as usize;
        if count > MAX_BLOBS_PER_BLOCK {
            return Err(SlotCommitmentsError::TooManyCommitments {
                count,
                max: MAX_BLOBS_PER_BLOCK,
            });
        }

        let expected = count * BYTES_PER_COMMITMENT;
        if body.len() != expected {
            return Err(SlotCommitmentsError::LengthMismatch {
                count,
                expected,
                actual: body.len(),
            });
        }

        let commitments = body
            .chunks_exact(BYTES_PER_COMMITMENT)
            .map(KZGCommitment::from_slice)
            .collect();
        Ok(Self { commitments })
    }

    pub fn len(&self) -> usize {
        self.commitments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commitments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn commitments(count: usize) -> Vec<KZGCommitment> {
        (0..count)
            .map(|index| KZGCommitment::repeat_byte(index as u8 + 1))
            .collect()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    #[case(6)]
    fn round_trip(#[case] count: usize) -> anyhow::Result<()> {
        let index = SlotCommitments {
            commitments: commitments(count),
        };

        let encoded = index.encode()?;
        assert_eq!(encoded.len(), 1 + count * BYTES_PER_COMMITMENT);
        assert_eq!(encoded[0] as usize, count);

        assert_eq!(SlotCommitments::decode(&encoded)?, index);
        Ok(())
    }

    #[test]
    fn encode_rejects_counts_above_the_block_maximum() {
        let index = SlotCommitments {
            commitments: commitments(MAX_BLOBS_PER_BLOCK + 1),
        };

        assert_eq!(
            index.encode(),
            Err(SlotCommitmentsError::TooManyCommitments {
                count: MAX_BLOBS_PER_BLOCK + 1,
                max: MAX_BLOBS_PER_BLOCK,
            })
        );
    }

    #[test]
    fn decode_rejects_counts_above_the_block_maximum() {
        let mut encoded = vec![7u8];
        encoded.extend_from_slice(&[0u8; 7 * BYTES_PER_COMMITMENT]);

        assert_eq!(
            SlotCommitments::decode(&encoded),
            Err(SlotCommitmentsError::TooManyCommitments {
                count: 7,
                max: MAX_BLOBS_PER_BLOCK,
            })
        );
    }

    #[test]
    fn decode_rejects_empty_input() {
        assert_eq!(
            SlotCommitments::decode(&[]),
            Err(SlotCommitmentsError::MissingCount)
        );
    }

    #[rstest]
    #[case::truncated(2 * BYTES_PER_COMMITMENT - 1)]
    #[case::overlong(2 * BYTES_PER_COMMITMENT + 1)]
    fn decode_rejects_length_mismatches(#[case] body_len: usize) {
        let mut encoded = vec![2u8];
        encoded.extend_from_slice(&vec![0u8; body_len]);

        assert_eq!(
            SlotCommitments::decode(&encoded),
            Err(SlotCommitmentsError::LengthMismatch {
                count: 2,
                expected: 2 * BYTES_PER_COMMITMENT,
                actual: body_len,
            })
        );
    }
}
