// Domain layer: entities and the storage port. No filesystem access here.

pub mod customer;
pub mod entity;
pub mod hotel;
pub mod ports;
pub mod reservation;

pub use customer::{Customer, CustomerUpdate};
pub use entity::{Entity, EntityKind, Mapping};
pub use hotel::{Hotel, HotelUpdate};
pub use reservation::{Reservation, ReservationStatus, ReservationUpdate};
