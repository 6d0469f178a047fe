pub mod collection;
pub mod store;

pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
pub use collection::Collection;
pub use store::{HotelStore, StoreLayout, StoredEntity};
