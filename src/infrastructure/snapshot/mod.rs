//! History snapshot infrastructure module

mod json_file;

pub use json_file::JsonSnapshotStore;
