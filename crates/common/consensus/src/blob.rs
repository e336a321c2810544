use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{FixedVector, typenum::U131072};
use tree_hash_derive::TreeHash;

/// A blob payload. Opaque to the DA layer beyond its fixed length.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct Blob {
    pub inner: FixedVector<u8, U131072>,
}

impl Blob {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            inner: FixedVector::new(bytes).expect("blob must be BYTES_PER_BLOB bytes"),
        }
    }
}
