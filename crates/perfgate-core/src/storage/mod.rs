pub mod rows;
pub mod store;
pub(crate) mod store_internal;

pub use store::Store;
