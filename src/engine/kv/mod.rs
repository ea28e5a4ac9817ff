pub mod entry;

pub use entry::{KvEntry, TsKvEntry};
