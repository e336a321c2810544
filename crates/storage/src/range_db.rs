use std::{path::Path, sync::Arc};

use redb::{Builder, Database, Durability, ReadableDatabase, TableDefinition};

use crate::{dir::create_alder_dir, errors::StoreError, index_db::IndexDb};

pub const REDB_FILE: &str = "alder.redb";

/// The size of the cache for the database
///
/// 1 GiB
pub const REDB_CACHE_SIZE: usize = 1_024 * 1_024 * 1_024;

const BLOB_INDEX_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("blob_index");

/// Slot-partitioned [`IndexDb`] over a single redb table.
///
/// The logical key `(slot, key)` maps to the physical key
/// `slot.to_be_bytes() ++ key`, which keeps every record of a slot in one
/// contiguous range of the table.
#[derive(Clone, Debug)]
pub struct RangeDb {
    db: Arc<Database>,
}

impl RangeDb {
    pub fn new(data_dir: &Path) -> Result<Self, StoreError> {
        let db = Builder::new()
            .set_cache_size(REDB_CACHE_SIZE)
            .create(data_dir.join(REDB_FILE))
            .map_err(|err| StoreError::Database(err.into()))?;

        // Open the table once so reads against a fresh database don't
        // fail with a missing table.
        let mut write_txn = db.begin_write()?;
        write_txn.set_durability(Durability::Immediate)?;
        write_txn.open_table(BLOB_INDEX_TABLE)?;
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Opens the database in the system's default alder data directory.
    pub fn open_default() -> Result<Self, StoreError> {
        let alder_dir = create_alder_dir()?;
        Self::new(&alder_dir)
    }

    fn ranged_key(slot: u64, key: &[u8]) -> Vec<u8> {
        let mut ranged = Vec::with_capacity(size_of::<u64>() + key.len());
        ranged.extend_from_slice(&slot.to_be_bytes());
        ranged.extend_from_slice(key);
        ranged
    }
}

impl IndexDb for RangeDb {
    fn has(&self, slot: u64, key: &[u8]) -> Result<bool, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(BLOB_INDEX_TABLE)?;
        let result = table.get(Self::ranged_key(slot, key).as_slice())?;
        Ok(result.is_some())
    }

    fn get(&self, slot: u64, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(BLOB_INDEX_TABLE)?;
        let result = table.get(Self::ranged_key(slot, key).as_slice())?;
        Ok(result.map(|res| res.value().to_vec()))
    }

    fn set(&self, slot: u64, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        let mut write_txn = self.db.begin_write()?;
        write_txn.set_durability(Durability::Immediate)?;
        let mut table = write_txn.open_table(BLOB_INDEX_TABLE)?;
        table.insert(Self::ranged_key(slot, key).as_slice(), value)?;
        drop(table);
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;

    #[test]
    fn set_then_get_and_has() -> Result<(), StoreError> {
        let tmp_dir = TempDir::new("set_then_get_and_has")?;
        let db = RangeDb::new(tmp_dir.path())?;

        let key = b"0xc424dae5e964dab6d1970424a0f3fba767762e58c59070affdc2af25e0fd6dcd";
        let value = b"0xd53f266c747ce3d59da6c6ca203ba9826ea886bc62b9191054424e9585318159";

        db.set(42, key, value)?;

        assert!(db.has(42, key)?);
        assert_eq!(db.get(42, key)?, Some(value.to_vec()));
        Ok(())
    }

    #[test]
    fn missing_key_is_none() -> Result<(), StoreError> {
        let tmp_dir = TempDir::new("missing_key_is_none")?;
        let db = RangeDb::new(tmp_dir.path())?;

        assert!(!db.has(7, b"missing")?);
        assert_eq!(db.get(7, b"missing")?, None);
        Ok(())
    }

    #[test]
    fn slots_partition_the_key_space() -> Result<(), StoreError> {
        let tmp_dir = TempDir::new("slots_partition_the_key_space")?;
        let db = RangeDb::new(tmp_dir.path())?;

        db.set(1, b"key", b"one")?;
        db.set(2, b"key", b"two")?;

        assert_eq!(db.get(1, b"key")?, Some(b"one".to_vec()));
        assert_eq!(db.get(2, b"key")?, Some(b"two".to_vec()));
        assert!(!db.has(3, b"key")?);
        Ok(())
    }

    #[test]
    fn set_replaces_previous_value() -> Result<(), StoreError> {
        let tmp_dir = TempDir::new("set_replaces_previous_value")?;
        let db = RangeDb::new(tmp_dir.path())?;

        db.set(5, b"key", b"old")?;
        db.set(5, b"key", b"new")?;

        assert_eq!(db.get(5, b"key")?, Some(b"new".to_vec()));
        Ok(())
    }
}
