use crate::adapters::LocalStorage;
use crate::core::collection::Collection;
use crate::domain::entity::{Entity, EntityKind};
use crate::domain::ports::Storage;
use crate::domain::{Customer, Hotel, Reservation, ReservationStatus};
use crate::utils::error::{HotelSystemError, Result};
use crate::utils::validation::Validate;
use std::path::PathBuf;
use std::sync::Arc;

/// File names of the three collections, relative to the storage root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    pub hotels_file: String,
    pub customers_file: String,
    pub reservations_file: String,
}

impl Default for StoreLayout {
    fn default() -> Self {
        Self {
            hotels_file: EntityKind::Hotel.default_file_name().to_string(),
            customers_file: EntityKind::Customer.default_file_name().to_string(),
            reservations_file: EntityKind::Reservation.default_file_name().to_string(),
        }
    }
}

/// The hotel, customer and reservation collections plus the rules that tie
/// them together.
pub struct HotelStore {
    hotels: Collection<Hotel>,
    customers: Collection<Customer>,
    reservations: Collection<Reservation>,
}

/// Per-type hooks behind the generic store operations.
pub trait StoredEntity: Entity {
    fn collection(store: &HotelStore) -> &Collection<Self>;

    fn collection_mut(store: &mut HotelStore) -> &mut Collection<Self>;

    fn create_in(store: &mut HotelStore, entity: Self) -> Result<()> {
        Self::collection_mut(store).insert(entity)
    }

    /// Rejects replacements that would bypass a domain operation.
    fn check_replacement(current: &Self, next: &Self) -> Result<()> {
        keep_created_date(current, next)
    }

    fn delete_from(store: &mut HotelStore, id: &str) -> Result<Self> {
        Self::collection_mut(store).remove(id)
    }

    fn clear_from(store: &mut HotelStore) -> Result<()> {
        Self::collection_mut(store).clear()
    }
}

fn keep_created_date<E: Entity>(current: &E, next: &E) -> Result<()> {
    if current.created_date() != next.created_date() {
        return Err(HotelSystemError::validation(
            "created_date",
            "creation date cannot be changed",
        ));
    }
    Ok(())
}

impl HotelStore {
    pub fn open(storage: Arc<dyn Storage>, layout: &StoreLayout) -> Result<Self> {
        let store = Self {
            hotels: Collection::open(storage.clone(), layout.hotels_file.clone())?,
            customers: Collection::open(storage.clone(), layout.customers_file.clone())?,
            reservations: Collection::open(storage, layout.reservations_file.clone())?,
        };
        store.verify_references()?;

        tracing::info!(
            "Opened store: {} hotels, {} customers, {} reservations",
            store.hotels.len(),
            store.customers.len(),
            store.reservations.len()
        );
        Ok(store)
    }

    /// Opens the default layout under `data_dir`.
    pub fn open_local(data_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::open(Arc::new(LocalStorage::new(data_dir)), &StoreLayout::default())
    }

    pub fn create<E: StoredEntity>(&mut self, entity: E) -> Result<()> {
        let id = entity.id().to_string();
        E::create_in(self, entity)?;
        tracing::info!("Created {} {}", E::KIND, id);
        Ok(())
    }

    pub fn read<E: StoredEntity>(&self, id: &str) -> Option<E> {
        E::collection(self).get(id).cloned()
    }

    pub fn list<E: StoredEntity>(&self) -> Vec<E> {
        E::collection(self).iter().cloned().collect()
    }

    pub fn update<E: StoredEntity>(&mut self, id: &str, entity: E) -> Result<()> {
        entity.validate()?;
        let current = E::collection(self)
            .get(id)
            .ok_or_else(|| HotelSystemError::not_found(E::KIND, id))?;
        E::check_replacement(current, &entity)?;

        E::collection_mut(self).replace(id, entity)?;
        tracing::info!("Updated {} {}", E::KIND, id);
        Ok(())
    }

    pub fn delete<E: StoredEntity>(&mut self, id: &str) -> Result<E> {
        let removed = E::delete_from(self, id)?;
        tracing::info!("Deleted {} {}", E::KIND, id);
        Ok(removed)
    }

    pub fn clear<E: StoredEntity>(&mut self) -> Result<()> {
        E::clear_from(self)?;
        tracing::info!("Cleared {} records", E::KIND);
        Ok(())
    }

    /// Empties every collection, dependents first.
    pub fn clear_all(&mut self) -> Result<()> {
        self.reservations.clear()?;
        self.customers.clear()?;
        self.hotels.clear()?;
        tracing::info!("Cleared all collections");
        Ok(())
    }

    /// Re-reads all three collections; nothing is swapped in unless every
    /// file loads and the references check out.
    pub fn reload(&mut self) -> Result<()> {
        let next = Self {
            hotels: self.hotels.reopen()?,
            customers: self.customers.reopen()?,
            reservations: self.reservations.reopen()?,
        };
        next.verify_references()?;
        *self = next;
        Ok(())
    }

    pub fn query_by_hotel(&self, hotel_id: &str) -> Vec<Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.hotel_id() == hotel_id)
            .cloned()
            .collect()
    }

    pub fn query_by_customer(&self, customer_id: &str) -> Vec<Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.customer_id() == customer_id)
            .cloned()
            .collect()
    }

    /// Marks the reservation cancelled and gives its room back to the hotel.
    ///
    /// The reservation is written first; if the hotel write then fails the
    /// reservation is restored before the error is returned.
    pub fn cancel_reservation(&mut self, reservation_id: &str) -> Result<Reservation> {
        let original = self
            .reservations
            .get(reservation_id)
            .cloned()
            .ok_or_else(|| HotelSystemError::not_found(EntityKind::Reservation, reservation_id))?;

        let mut cancelled = original.clone();
        cancelled.cancel()?;

        let mut hotel = self.hotels.get(original.hotel_id()).cloned().ok_or_else(|| {
            HotelSystemError::reference(format!(
                "reservation {} points to missing hotel {}",
                reservation_id,
                original.hotel_id()
            ))
        })?;
        hotel.release_room()?;

        self.reservations.replace(reservation_id, cancelled.clone())?;
        if let Err(e) = self.hotels.replace(original.hotel_id(), hotel) {
            tracing::warn!(
                "Releasing a room in hotel {} failed, restoring reservation {}: {}",
                original.hotel_id(),
                reservation_id,
                e
            );
            if let Err(undo) = self.reservations.replace(reservation_id, original) {
                tracing::error!(
                    "Could not restore reservation {} after failed cancel: {}",
                    reservation_id,
                    undo
                );
            }
            return Err(e);
        }

        tracing::info!(
            "Cancelled reservation {} for hotel {}",
            reservation_id,
            cancelled.hotel_id()
        );
        Ok(cancelled)
    }

    /// Every active reservation must point at a stored hotel and customer.
    ///
    /// Cancelled reservations are history: the hotel or customer they name
    /// may have been deleted since.
    pub fn verify_references(&self) -> Result<()> {
        for reservation in self.reservations.iter().filter(|r| r.is_active()) {
            if !self.hotels.contains(reservation.hotel_id()) {
                return Err(HotelSystemError::reference(format!(
                    "reservation {} points to missing hotel {}",
                    reservation.reservation_id(),
                    reservation.hotel_id()
                )));
            }
            if !self.customers.contains(reservation.customer_id()) {
                return Err(HotelSystemError::reference(format!(
                    "reservation {} points to missing customer {}",
                    reservation.reservation_id(),
                    reservation.customer_id()
                )));
            }
        }
        Ok(())
    }

    fn active_reservation_ids(&self, matches: impl Fn(&Reservation) -> bool) -> Vec<String> {
        self.reservations
            .iter()
            .filter(|r| r.is_active() && matches(r))
            .map(|r| r.reservation_id().to_string())
            .collect()
    }
}

impl StoredEntity for Hotel {
    fn collection(store: &HotelStore) -> &Collection<Self> {
        &store.hotels
    }

    fn collection_mut(store: &mut HotelStore) -> &mut Collection<Self> {
        &mut store.hotels
    }

    fn check_replacement(current: &Self, next: &Self) -> Result<()> {
        keep_created_date(current, next)?;
        if current.occupied_rooms() != next.occupied_rooms() {
            return Err(HotelSystemError::validation(
                "rooms_available",
                format!(
                    "{} rooms are held by reservations; only reserving or cancelling changes that",
                    current.occupied_rooms()
                ),
            ));
        }
        Ok(())
    }

    fn delete_from(store: &mut HotelStore, id: &str) -> Result<Self> {
        if !store.hotels.contains(id) {
            return Err(HotelSystemError::not_found(EntityKind::Hotel, id));
        }
        let blocking = store.active_reservation_ids(|r| r.hotel_id() == id);
        if !blocking.is_empty() {
            tracing::warn!("Refusing to delete hotel {}: active reservations {:?}", id, blocking);
            return Err(HotelSystemError::reference(format!(
                "hotel {} still has active reservations: {}",
                id,
                blocking.join(", ")
            )));
        }
        store.hotels.remove(id)
    }

    fn clear_from(store: &mut HotelStore) -> Result<()> {
        let blocking = store.active_reservation_ids(|_| true);
        if !blocking.is_empty() {
            return Err(HotelSystemError::reference(format!(
                "hotels are still referenced by active reservations: {}",
                blocking.join(", ")
            )));
        }
        store.hotels.clear()
    }
}

impl StoredEntity for Customer {
    fn collection(store: &HotelStore) -> &Collection<Self> {
        &store.customers
    }

    fn collection_mut(store: &mut HotelStore) -> &mut Collection<Self> {
        &mut store.customers
    }

    fn delete_from(store: &mut HotelStore, id: &str) -> Result<Self> {
        if !store.customers.contains(id) {
            return Err(HotelSystemError::not_found(EntityKind::Customer, id));
        }
        let blocking = store.active_reservation_ids(|r| r.customer_id() == id);
        if !blocking.is_empty() {
            tracing::warn!("Refusing to delete customer {}: active reservations {:?}", id, blocking);
            return Err(HotelSystemError::reference(format!(
                "customer {} still has active reservations: {}",
                id,
                blocking.join(", ")
            )));
        }
        store.customers.remove(id)
    }

    fn clear_from(store: &mut HotelStore) -> Result<()> {
        let blocking = store.active_reservation_ids(|_| true);
        if !blocking.is_empty() {
            return Err(HotelSystemError::reference(format!(
                "customers are still referenced by active reservations: {}",
                blocking.join(", ")
            )));
        }
        store.customers.clear()
    }
}

impl StoredEntity for Reservation {
    fn collection(store: &HotelStore) -> &Collection<Self> {
        &store.reservations
    }

    fn collection_mut(store: &mut HotelStore) -> &mut Collection<Self> {
        &mut store.reservations
    }

    /// Checks references, takes a room from the hotel, then stores the
    /// reservation. A failed reservation write gives the room back.
    fn create_in(store: &mut HotelStore, reservation: Self) -> Result<()> {
        if store.reservations.contains(reservation.reservation_id()) {
            return Err(HotelSystemError::DuplicateKeyError {
                kind: EntityKind::Reservation,
                id: reservation.reservation_id().to_string(),
            });
        }
        reservation.validate()?;
        if reservation.status() != ReservationStatus::Active {
            return Err(HotelSystemError::validation(
                "status",
                "new reservations must be active",
            ));
        }
        if !store.customers.contains(reservation.customer_id()) {
            return Err(HotelSystemError::reference(format!(
                "customer {} does not exist",
                reservation.customer_id()
            )));
        }
        let original_hotel = store
            .hotels
            .get(reservation.hotel_id())
            .cloned()
            .ok_or_else(|| {
                HotelSystemError::reference(format!(
                    "hotel {} does not exist",
                    reservation.hotel_id()
                ))
            })?;

        let mut hotel = original_hotel.clone();
        hotel.reserve_room()?;
        store.hotels.replace(reservation.hotel_id(), hotel)?;

        let hotel_id = reservation.hotel_id().to_string();
        if let Err(e) = store.reservations.insert(reservation) {
            tracing::warn!("Storing reservation failed, returning room to hotel {}: {}", hotel_id, e);
            if let Err(undo) = store.hotels.replace(&hotel_id, original_hotel) {
                tracing::error!(
                    "Could not restore room count of hotel {} after failed reservation: {}",
                    hotel_id,
                    undo
                );
            }
            return Err(e);
        }
        Ok(())
    }

    fn check_replacement(current: &Self, next: &Self) -> Result<()> {
        keep_created_date(current, next)?;
        if current.hotel_id() != next.hotel_id() {
            return Err(HotelSystemError::validation(
                "hotel_id",
                "a reservation cannot move to another hotel",
            ));
        }
        if current.customer_id() != next.customer_id() {
            return Err(HotelSystemError::validation(
                "customer_id",
                "a reservation cannot move to another customer",
            ));
        }
        if current.status() != next.status() {
            return Err(HotelSystemError::validation(
                "status",
                "use cancel_reservation to change the status",
            ));
        }
        Ok(())
    }

    fn delete_from(store: &mut HotelStore, id: &str) -> Result<Self> {
        let reservation = store
            .reservations
            .get(id)
            .ok_or_else(|| HotelSystemError::not_found(EntityKind::Reservation, id))?;
        if reservation.is_active() {
            return Err(HotelSystemError::invalid_state(format!(
                "reservation {} is still active; cancel it before deleting",
                id
            )));
        }
        store.reservations.remove(id)
    }
}
