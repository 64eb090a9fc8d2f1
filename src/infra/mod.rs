//! Key-value storage areas: file-backed and in-memory

mod fs;
mod kv;

pub use fs::FileKvStore;
pub use kv::{KeyValueStore, KvError, MemoryKvStore};
