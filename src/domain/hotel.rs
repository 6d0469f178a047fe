use crate::domain::entity::{Entity, EntityKind};
use crate::utils::error::{HotelSystemError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative_amount, validate_positive_number,
    validate_range, Validate,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hotel {
    hotel_id: String,
    name: String,
    location: String,
    total_rooms: u32,
    rooms_available: u32,
    price_per_room: f64,
    created_date: DateTime<Utc>,
}

/// Fields a caller may change on an existing hotel. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct HotelUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub total_rooms: Option<u32>,
    pub price_per_room: Option<f64>,
}

impl Hotel {
    /// A hotel with every room available.
    pub fn new(
        hotel_id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        total_rooms: u32,
        price_per_room: f64,
    ) -> Result<Self> {
        Self::with_availability(hotel_id, name, location, total_rooms, total_rooms, price_per_room)
    }

    pub fn with_availability(
        hotel_id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        total_rooms: u32,
        rooms_available: u32,
        price_per_room: f64,
    ) -> Result<Self> {
        let hotel = Self {
            hotel_id: hotel_id.into(),
            name: name.into(),
            location: location.into(),
            total_rooms,
            rooms_available,
            price_per_room,
            created_date: Utc::now(),
        };
        hotel.validate()?;
        Ok(hotel)
    }

    pub fn hotel_id(&self) -> &str {
        &self.hotel_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn total_rooms(&self) -> u32 {
        self.total_rooms
    }

    pub fn rooms_available(&self) -> u32 {
        self.rooms_available
    }

    pub fn occupied_rooms(&self) -> u32 {
        self.total_rooms.saturating_sub(self.rooms_available)
    }

    pub fn price_per_room(&self) -> f64 {
        self.price_per_room
    }

    /// Applies `changes` only if the merged hotel is valid.
    ///
    /// Changing `total_rooms` moves `rooms_available` by the same amount, so
    /// the number of occupied rooms stays put.
    pub fn update(&mut self, changes: HotelUpdate) -> Result<()> {
        let mut next = self.clone();

        if let Some(name) = changes.name {
            next.name = name;
        }
        if let Some(location) = changes.location {
            next.location = location;
        }
        if let Some(total_rooms) = changes.total_rooms {
            let occupied = self.occupied_rooms();
            if total_rooms < occupied {
                return Err(HotelSystemError::validation(
                    "total_rooms",
                    format!(
                        "cannot drop to {} while {} rooms are occupied",
                        total_rooms, occupied
                    ),
                ));
            }
            next.total_rooms = total_rooms;
            next.rooms_available = total_rooms - occupied;
        }
        if let Some(price_per_room) = changes.price_per_room {
            next.price_per_room = price_per_room;
        }

        next.validate()?;
        *self = next;
        Ok(())
    }

    pub fn reserve_room(&mut self) -> Result<()> {
        if self.rooms_available == 0 {
            return Err(HotelSystemError::CapacityError {
                hotel_id: self.hotel_id.clone(),
            });
        }
        self.rooms_available -= 1;
        Ok(())
    }

    pub fn release_room(&mut self) -> Result<()> {
        if self.rooms_available >= self.total_rooms {
            return Err(HotelSystemError::invalid_state(format!(
                "all {} rooms of hotel {} are already available",
                self.total_rooms, self.hotel_id
            )));
        }
        self.rooms_available += 1;
        Ok(())
    }
}

impl Validate for Hotel {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("hotel_id", &self.hotel_id)?;
        validate_non_empty_string("name", &self.name)?;
        validate_non_empty_string("location", &self.location)?;
        validate_positive_number("total_rooms", self.total_rooms, 1)?;
        validate_range("rooms_available", self.rooms_available, 0, self.total_rooms)?;
        validate_non_negative_amount("price_per_room", self.price_per_room)
    }
}

impl Entity for Hotel {
    const KIND: EntityKind = EntityKind::Hotel;

    fn id(&self) -> &str {
        &self.hotel_id
    }

    fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hotel(ID: {}, Name: {}, Location: {}, Rooms: {}/{}, Price: ${:.2})",
            self.hotel_id,
            self.name,
            self.location,
            self.rooms_available,
            self.total_rooms,
            self.price_per_room
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: HotelSystemError) -> String {
        match err {
            HotelSystemError::ValidationError { field, .. } => field,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_hotel_has_all_rooms_available() {
        let hotel = Hotel::new("H001", "Grand Plaza Hotel", "New York", 100, 150.0).unwrap();
        assert_eq!(hotel.rooms_available(), 100);
        assert_eq!(hotel.occupied_rooms(), 0);
    }

    #[test]
    fn test_constructor_names_first_invalid_field() {
        assert_eq!(field_of(Hotel::new("", "Name", "City", 10, 1.0).unwrap_err()), "hotel_id");
        assert_eq!(field_of(Hotel::new("H1", " ", "City", 10, 1.0).unwrap_err()), "name");
        assert_eq!(field_of(Hotel::new("H1", "Name", "", 10, 1.0).unwrap_err()), "location");
        assert_eq!(field_of(Hotel::new("H1", "Name", "City", 0, 1.0).unwrap_err()), "total_rooms");
        assert_eq!(
            field_of(Hotel::with_availability("H1", "Name", "City", 5, 6, 1.0).unwrap_err()),
            "rooms_available"
        );
        assert_eq!(
            field_of(Hotel::new("H1", "Name", "City", 5, -10.0).unwrap_err()),
            "price_per_room"
        );
    }

    #[test]
    fn test_mapping_round_trip() {
        let hotel = Hotel::with_availability("H002", "Beach Resort", "Miami", 50, 12, 200.0).unwrap();
        let mapping = hotel.to_mapping().unwrap();

        assert_eq!(mapping["hotel_id"], "H002");
        assert_eq!(mapping["rooms_available"], 12);

        let restored = Hotel::from_mapping(mapping).unwrap();
        assert_eq!(restored, hotel);
        assert_eq!(restored.created_date(), hotel.created_date());
    }

    #[test]
    fn test_from_mapping_rejects_broken_invariant() {
        let hotel = Hotel::new("H003", "Inn", "Boston", 5, 80.0).unwrap();
        let mut mapping = hotel.to_mapping().unwrap();
        mapping.insert("rooms_available".to_string(), 9.into());

        assert_eq!(field_of(Hotel::from_mapping(mapping).unwrap_err()), "rooms_available");
    }

    #[test]
    fn test_reserve_room_at_zero_fails_unchanged() {
        let mut hotel = Hotel::with_availability("H004", "Tiny", "Austin", 2, 0, 90.0).unwrap();
        let err = hotel.reserve_room().unwrap_err();
        assert!(matches!(err, HotelSystemError::CapacityError { ref hotel_id } if hotel_id == "H004"));
        assert_eq!(hotel.rooms_available(), 0);
    }

    #[test]
    fn test_reserve_then_release() {
        let mut hotel = Hotel::new("H005", "Lodge", "Denver", 3, 70.0).unwrap();
        hotel.reserve_room().unwrap();
        assert_eq!(hotel.rooms_available(), 2);
        hotel.release_room().unwrap();
        assert_eq!(hotel.rooms_available(), 3);

        let err = hotel.release_room().unwrap_err();
        assert!(matches!(err, HotelSystemError::InvalidStateError { .. }));
        assert_eq!(hotel.rooms_available(), 3);
    }

    #[test]
    fn test_update_keeps_occupancy() {
        let mut hotel = Hotel::with_availability("H006", "Tower", "Chicago", 10, 4, 120.0).unwrap();
        hotel
            .update(HotelUpdate {
                total_rooms: Some(20),
                price_per_room: Some(99.5),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(hotel.total_rooms(), 20);
        assert_eq!(hotel.rooms_available(), 14);
        assert_eq!(hotel.occupied_rooms(), 6);
        assert_eq!(hotel.price_per_room(), 99.5);
    }

    #[test]
    fn test_invalid_update_leaves_hotel_unchanged() {
        let mut hotel = Hotel::with_availability("H007", "Harbor", "Seattle", 10, 4, 120.0).unwrap();
        let before = hotel.clone();

        let err = hotel
            .update(HotelUpdate {
                name: Some("Harbor View".to_string()),
                total_rooms: Some(5),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(field_of(err), "total_rooms");
        assert_eq!(hotel, before);

        let err = hotel
            .update(HotelUpdate {
                name: Some("Harbor View".to_string()),
                location: Some(String::new()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(field_of(err), "location");
        assert_eq!(hotel, before);
    }

    #[test]
    fn test_display() {
        let hotel = Hotel::new("H001", "Grand Plaza Hotel", "New York", 100, 150.0).unwrap();
        assert_eq!(
            hotel.to_string(),
            "Hotel(ID: H001, Name: Grand Plaza Hotel, Location: New York, Rooms: 100/100, Price: $150.00)"
        );
    }
}
