mod json_store;
mod interface;

pub use interface::{UserSource, Result, BackendError};
pub use json_store::JsonStore;
