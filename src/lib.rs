pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use config::toml_config::StoreConfig;
pub use core::{HotelStore, StoreLayout};
pub use domain::{Customer, Entity, EntityKind, Hotel, Reservation, ReservationStatus};
pub use utils::error::{HotelSystemError, Result};
