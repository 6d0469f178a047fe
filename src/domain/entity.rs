use crate::utils::error::{HotelSystemError, Result};
use crate::utils::validation::Validate;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Plain key/value form of an entity, as written to disk.
pub type Mapping = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Hotel,
    Customer,
    Reservation,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Customer => "customer",
            Self::Reservation => "reservation",
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Hotel => "hotels.json",
            Self::Customer => "customers.json",
            Self::Reservation => "reservations.json",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hotel => "Hotel",
            Self::Customer => "Customer",
            Self::Reservation => "Reservation",
        };
        f.write_str(name)
    }
}

/// Capabilities shared by every stored record type.
///
/// `from_mapping(to_mapping(e))` must yield a value equal to `e`, including
/// the original `created_date`.
pub trait Entity:
    Validate + Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug + fmt::Display
{
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn created_date(&self) -> DateTime<Utc>;

    fn to_mapping(&self) -> Result<Mapping> {
        match serde_json::to_value(self)? {
            Value::Object(mapping) => Ok(mapping),
            other => Err(HotelSystemError::validation(
                Self::KIND.as_str(),
                format!("serialized to a non-object value: {}", other),
            )),
        }
    }

    fn from_mapping(mapping: Mapping) -> Result<Self> {
        let entity: Self = serde_json::from_value(Value::Object(mapping))
            .map_err(|e| HotelSystemError::validation(Self::KIND.as_str(), e.to_string()))?;
        entity.validate()?;
        Ok(entity)
    }
}
