use crate::domain::entity::{Entity, EntityKind};
use crate::utils::error::Result;
use crate::utils::validation::{validate_email, validate_non_empty_string, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Customer {
    customer_id: String,
    name: String,
    email: String,
    phone: String,
    created_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Customer {
    pub fn new(
        customer_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self> {
        let customer = Self {
            customer_id: customer_id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            created_date: Utc::now(),
        };
        customer.validate()?;
        Ok(customer)
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn update(&mut self, changes: CustomerUpdate) -> Result<()> {
        let mut next = self.clone();
        if let Some(name) = changes.name {
            next.name = name;
        }
        if let Some(email) = changes.email {
            next.email = email;
        }
        if let Some(phone) = changes.phone {
            next.phone = phone;
        }

        next.validate()?;
        *self = next;
        Ok(())
    }
}

impl Validate for Customer {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("customer_id", &self.customer_id)?;
        validate_non_empty_string("name", &self.name)?;
        validate_email("email", &self.email)?;
        validate_non_empty_string("phone", &self.phone)
    }
}

impl Entity for Customer {
    const KIND: EntityKind = EntityKind::Customer;

    fn id(&self) -> &str {
        &self.customer_id
    }

    fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer(ID: {}, Name: {}, Email: {}, Phone: {})",
            self.customer_id, self.name, self.email, self.phone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::HotelSystemError;

    #[test]
    fn test_valid_customer() {
        let customer = Customer::new("C001", "John Smith", "john@example.com", "555-1001").unwrap();
        assert_eq!(customer.email(), "john@example.com");
        assert_eq!(
            customer.to_string(),
            "Customer(ID: C001, Name: John Smith, Email: john@example.com, Phone: 555-1001)"
        );
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let err = Customer::new("C999", "No Email", "invalid-email", "555-0000").unwrap_err();
        match err {
            HotelSystemError::ValidationError { field, .. } => assert_eq!(field, "email"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_phone_is_rejected() {
        let err = Customer::new("C002", "Maria Garcia", "maria@example.com", "").unwrap_err();
        assert!(matches!(err, HotelSystemError::ValidationError { ref field, .. } if field == "phone"));
    }

    #[test]
    fn test_update_is_all_or_nothing() {
        let mut customer =
            Customer::new("C003", "Ana Lopez", "ana@example.com", "555-1003").unwrap();
        let before = customer.clone();

        let result = customer.update(CustomerUpdate {
            name: Some("Ana L.".to_string()),
            email: Some("ana.example.com".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
        assert_eq!(customer, before);

        customer
            .update(CustomerUpdate {
                phone: Some("555-2003".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(customer.phone(), "555-2003");
        assert_eq!(customer.created_date(), before.created_date());
    }

    #[test]
    fn test_mapping_round_trip() {
        let customer = Customer::new("C004", "Li Wei", "li@example.com", "555-1004").unwrap();
        let restored = Customer::from_mapping(customer.to_mapping().unwrap()).unwrap();
        assert_eq!(restored, customer);
    }

    #[test]
    fn test_from_mapping_rejects_unknown_fields() {
        let customer = Customer::new("C005", "Sam", "sam@example.com", "555-1005").unwrap();
        let mut mapping = customer.to_mapping().unwrap();
        mapping.insert("loyalty_tier".to_string(), "gold".into());
        assert!(Customer::from_mapping(mapping).is_err());
    }
}
