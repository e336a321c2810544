pub mod beacon_block_header;
pub mod blob;
pub mod blob_sidecar;
pub mod bls;
pub mod constants;
pub mod polynomial_commitments;
