use alder_consensus::polynomial_commitments::kzg_commitment::KZGCommitment;
use alder_storage::errors::StoreError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SlotCommitmentsError {
    #[error("commitment count {count} exceeds the per-block maximum of {max}")]
    TooManyCommitments { count: usize, max: usize },

    #[error("commitment record is empty")]
    MissingCount,

    #[error(
        "commitment record body is {actual} bytes, expected {expected} for {count} commitments"
    )]
    LengthMismatch {
        count: usize,
        expected: usize,
        actual: usize,
    },
}

#[derive(Error, Debug)]
pub enum BlobStoreError {
    /// An entry in the sidecar list handed to `persist` was absent.
    #[error("attempted to store an absent blob sidecar")]
    MissingSidecar,

    #[error("no blob sidecar stored for slot {slot} and commitment {commitment}")]
    SidecarNotFound { slot: u64, commitment: KZGCommitment },

    #[error("invalid SSZ in stored blob sidecar: {0:?}")]
    InvalidSsz(ssz::DecodeError),

    #[error(transparent)]
    Codec(#[from] SlotCommitmentsError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("blob read task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<ssz::DecodeError> for BlobStoreError {
    fn from(err: ssz::DecodeError) -> Self {
        Self::InvalidSsz(err)
    }
}
