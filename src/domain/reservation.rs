use crate::domain::entity::{Entity, EntityKind};
use crate::utils::error::{HotelSystemError, Result};
use crate::utils::validation::{validate_date_order, validate_non_empty_string, Validate};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Active,
    Cancelled,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Reservation {
    reservation_id: String,
    customer_id: String,
    hotel_id: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: ReservationStatus,
    created_date: DateTime<Utc>,
}

/// Only the stay dates can change; references and status cannot.
#[derive(Debug, Clone, Default)]
pub struct ReservationUpdate {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl Reservation {
    /// New reservations always start out active.
    pub fn new(
        reservation_id: impl Into<String>,
        customer_id: impl Into<String>,
        hotel_id: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Self> {
        let reservation = Self {
            reservation_id: reservation_id.into(),
            customer_id: customer_id.into(),
            hotel_id: hotel_id.into(),
            check_in,
            check_out,
            status: ReservationStatus::Active,
            created_date: Utc::now(),
        };
        reservation.validate()?;
        Ok(reservation)
    }

    pub fn reservation_id(&self) -> &str {
        &self.reservation_id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn hotel_id(&self) -> &str {
        &self.hotel_id
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn update(&mut self, changes: ReservationUpdate) -> Result<()> {
        let mut next = self.clone();
        if let Some(check_in) = changes.check_in {
            next.check_in = check_in;
        }
        if let Some(check_out) = changes.check_out {
            next.check_out = check_out;
        }

        next.validate()?;
        *self = next;
        Ok(())
    }

    /// `active -> cancelled`. A second cancel is an error, not a no-op.
    pub fn cancel(&mut self) -> Result<()> {
        match self.status {
            ReservationStatus::Active => {
                self.status = ReservationStatus::Cancelled;
                Ok(())
            }
            ReservationStatus::Cancelled => Err(HotelSystemError::invalid_state(format!(
                "reservation {} is already cancelled",
                self.reservation_id
            ))),
        }
    }
}

impl Validate for Reservation {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("reservation_id", &self.reservation_id)?;
        validate_non_empty_string("customer_id", &self.customer_id)?;
        validate_non_empty_string("hotel_id", &self.hotel_id)?;
        validate_date_order("check_out", self.check_in, self.check_out)
    }
}

impl Entity for Reservation {
    const KIND: EntityKind = EntityKind::Reservation;

    fn id(&self) -> &str {
        &self.reservation_id
    }

    fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation(ID: {}, Customer: {}, Hotel: {}, Check-in: {}, Check-out: {}, Status: {})",
            self.reservation_id,
            self.customer_id,
            self.hotel_id,
            self.check_in,
            self.check_out,
            self.status
        )
    }
}
