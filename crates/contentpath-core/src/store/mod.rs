//! [`ConfigStore`](crate::ports::ConfigStore) implementations.

mod json;
mod memory;

pub use json::{CONFIG_FILE_NAME, CONTENT_PATH_KEY, JsonConfigStore};
pub use memory::MemoryConfigStore;
