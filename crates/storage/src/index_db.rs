use crate::errors::StoreError;

/// Byte-oriented key-value access partitioned by slot.
///
/// The availability store owns its handle exclusively and is the only
/// writer. There is one production implementation,
/// [`RangeDb`](crate::range_db::RangeDb); tests substitute in-memory
/// doubles. Implementations must support concurrent reads; writes are
/// not required to be safe to issue concurrently for the same slot.
pub trait IndexDb {
    /// Whether a record exists at `(slot, key)`.
    fn has(&self, slot: u64, key: &[u8]) -> Result<bool, StoreError>;

    /// The record at `(slot, key)`, or `None` if absent.
    fn get(&self, slot: u64, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write the record at `(slot, key)`, replacing any previous value.
    fn set(&self, slot: u64, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
}
