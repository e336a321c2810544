use std::sync::Arc;

use alder_consensus::{
    blob_sidecar::BlobSidecar, polynomial_commitments::kzg_commitment::KZGCommitment,
};
use alder_network_spec::networks::ChainSpec;
use alder_storage::index_db::IndexDb;
use ssz::{Decode, Encode};
use tokio::task::JoinSet;
use tracing::info;

use crate::{
    errors::BlobStoreError,
    slot_commitments::{SLOT_COMMITMENTS_KEY, SlotCommitments},
};

/// Persists blob sidecars keyed by `(slot, commitment)` and answers
/// whether all blobs referenced by a block are currently available.
pub struct AvailabilityStore<DB> {
    index_db: Arc<DB>,
    chain_spec: Arc<ChainSpec>,
}

impl<DB: IndexDb + Send + Sync + 'static> AvailabilityStore<DB> {
    pub fn new(index_db: Arc<DB>, chain_spec: Arc<ChainSpec>) -> Self {
        Self {
            index_db,
            chain_spec,
        }
    }

    /// Whether every commitment referenced by a block has a sidecar stored
    /// for `slot`.
    ///
    /// Fail-closed: a backend fault reports `false` rather than an error,
    /// so a caller can never act on a block whose blobs it could not
    /// confirm. Lookups stop at the first missing or faulting commitment.
    pub fn is_data_available(&self, slot: u64, commitments: &[KZGCommitment]) -> bool {
        commitments
            .iter()
            .all(|commitment| matches!(self.index_db.has(slot, commitment.as_slice()), Ok(true)))
    }

    /// Store `sidecars` under their commitments for `slot`, then record
    /// the slot's ordered commitment index.
    ///
    /// Sidecars whose inclusion slot falls outside the DA retention window
    /// as of `slot` are skipped wholesale. Writes happen strictly in input
    /// order; the backing store is not safe for concurrent writes. The
    /// index record is written last, so an aborted call leaves already
    /// written sidecars unreachable rather than partially visible.
    pub fn persist(
        &self,
        slot: u64,
        sidecars: &[Option<BlobSidecar>],
    ) -> Result<(), BlobStoreError> {
        let Some(first) = sidecars.first() else {
            return Ok(());
        };
        let first = first.as_ref().ok_or(BlobStoreError::MissingSidecar)?;

        // All sidecars in one call share the inclusion slot of the first.
        if !self.chain_spec.within_da_period(first.slot(), slot) {
            return Ok(());
        }

        let mut commitments = Vec::with_capacity(sidecars.len());
        for sidecar in sidecars {
            let sidecar = sidecar.as_ref().ok_or(BlobStoreError::MissingSidecar)?;
            self.index_db.set(
                slot,
                sidecar.kzg_commitment.as_slice(),
                &sidecar.as_ssz_bytes(),
            )?;
            commitments.push(sidecar.kzg_commitment);
        }

        let index = SlotCommitments { commitments };
        self.index_db
            .set(slot, SLOT_COMMITMENTS_KEY, &index.encode()?)?;

        info!("Stored {} blob sidecars for slot {slot}", sidecars.len());
        Ok(())
    }

    /// All blob sidecars stored for `slot`, ordered as in the slot's
    /// commitment index.
    ///
    /// A slot with no index record yields an empty list; an unseen slot is
    /// a normal state, not a fault. Point reads fan out across blocking
    /// tasks, one per commitment. Every task is drained before the first
    /// failure is surfaced, and a failure discards all partial results.
    pub async fn blob_sidecars(&self, slot: u64) -> Result<Vec<BlobSidecar>, BlobStoreError> {
        let Some(encoded) = self.index_db.get(slot, SLOT_COMMITMENTS_KEY)? else {
            return Ok(Vec::new());
        };
        let index = SlotCommitments::decode(&encoded)?;

        let mut tasks = JoinSet::new();
        for (position, commitment) in index.commitments.iter().copied().enumerate() {
            let index_db = self.index_db.clone();
            tasks.spawn_blocking(move || {
                let bytes = index_db
                    .get(slot, commitment.as_slice())?
                    .ok_or(BlobStoreError::SidecarNotFound { slot, commitment })?;
                let sidecar = BlobSidecar::from_ssz_bytes(&bytes)?;
                Ok::<_, BlobStoreError>((position, sidecar))
            });
        }

        // Each task lands its sidecar at its index position, so the output
        // order matches the index regardless of completion order.
        let mut sidecars: Vec<Option<BlobSidecar>> = vec![None; index.len()];
        let mut first_error = None;
        while let Some(joined) = tasks.join_next().await {
            match joined.map_err(BlobStoreError::from).and_then(|task| task) {
                Ok((position, sidecar)) => sidecars[position] = Some(sidecar),
                Err(err) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }
        if let Some(err) = first_error {
            return Err(err);
        }

        let sidecars: Vec<BlobSidecar> = sidecars.into_iter().flatten().collect();
        debug_assert_eq!(sidecars.len(), index.len());
        Ok(sidecars)
    }
}
