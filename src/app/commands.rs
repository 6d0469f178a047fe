use crate::app::demo;
use crate::config::cli::{Command, CustomerAction, HotelAction};
use crate::core::HotelStore;
use crate::domain::{Customer, CustomerUpdate, Entity, Hotel, HotelUpdate, Reservation};
use crate::utils::error::{HotelSystemError, Result};
use crate::utils::validation::parse_iso_date;

/// Runs one CLI command and returns the lines to print.
pub fn execute(store: &mut HotelStore, command: Command) -> Result<Vec<String>> {
    match command {
        Command::Demo => demo::run(store),
        Command::Hotel { action } => hotel(store, action),
        Command::Customer { action } => customer(store, action),
        Command::Reserve(args) => {
            let reservation = Reservation::new(
                args.id,
                args.customer,
                args.hotel,
                parse_iso_date("check_in", &args.check_in)?,
                parse_iso_date("check_out", &args.check_out)?,
            )?;
            store.create(reservation.clone())?;
            Ok(vec![format!("✓ Created: {}", reservation)])
        }
        Command::Cancel { reservation_id } => {
            let cancelled = store.cancel_reservation(&reservation_id)?;
            Ok(vec![format!("✓ Cancelled: {}", cancelled)])
        }
        Command::Reservations { hotel, customer } => {
            let reservations = match (hotel, customer) {
                (Some(hotel_id), _) => store.query_by_hotel(&hotel_id),
                (None, Some(customer_id)) => store.query_by_customer(&customer_id),
                (None, None) => store.list::<Reservation>(),
            };
            Ok(listing(&reservations))
        }
    }
}

fn hotel(store: &mut HotelStore, action: HotelAction) -> Result<Vec<String>> {
    match action {
        HotelAction::Add(args) => {
            let hotel = Hotel::new(args.id, args.name, args.location, args.rooms, args.price)?;
            store.create(hotel.clone())?;
            Ok(vec![format!("✓ Created: {}", hotel)])
        }
        HotelAction::List => Ok(listing(&store.list::<Hotel>())),
        HotelAction::Show { hotel_id } => show(store.read::<Hotel>(&hotel_id), &hotel_id),
        HotelAction::Update(args) => {
            let mut hotel = found(store.read::<Hotel>(&args.hotel_id), &args.hotel_id)?;
            hotel.update(HotelUpdate {
                name: args.name,
                location: args.location,
                total_rooms: args.rooms,
                price_per_room: args.price,
            })?;
            store.update(&args.hotel_id, hotel.clone())?;
            Ok(vec![format!("✓ Updated: {}", hotel)])
        }
        HotelAction::Delete { hotel_id } => {
            let removed = store.delete::<Hotel>(&hotel_id)?;
            Ok(vec![format!("✓ Deleted: {}", removed)])
        }
    }
}

fn customer(store: &mut HotelStore, action: CustomerAction) -> Result<Vec<String>> {
    match action {
        CustomerAction::Add(args) => {
            let customer = Customer::new(args.id, args.name, args.email, args.phone)?;
            store.create(customer.clone())?;
            Ok(vec![format!("✓ Created: {}", customer)])
        }
        CustomerAction::List => Ok(listing(&store.list::<Customer>())),
        CustomerAction::Show { customer_id } => {
            show(store.read::<Customer>(&customer_id), &customer_id)
        }
        CustomerAction::Update(args) => {
            let mut customer = found(store.read::<Customer>(&args.customer_id), &args.customer_id)?;
            customer.update(CustomerUpdate {
                name: args.name,
                email: args.email,
                phone: args.phone,
            })?;
            store.update(&args.customer_id, customer.clone())?;
            Ok(vec![format!("✓ Updated: {}", customer)])
        }
        CustomerAction::Delete { customer_id } => {
            let removed = store.delete::<Customer>(&customer_id)?;
            Ok(vec![format!("✓ Deleted: {}", removed)])
        }
    }
}

fn found<E: Entity>(entity: Option<E>, id: &str) -> Result<E> {
    entity.ok_or_else(|| HotelSystemError::not_found(E::KIND, id))
}

fn show<E: Entity>(entity: Option<E>, id: &str) -> Result<Vec<String>> {
    Ok(vec![found(entity, id)?.to_string()])
}

fn listing<E: Entity>(entities: &[E]) -> Vec<String> {
    if entities.is_empty() {
        return vec![format!("No {} records", E::KIND.as_str())];
    }
    entities.iter().map(|e| format!("  - {}", e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::{CustomerArgs, HotelArgs, ReserveArgs};
    use tempfile::TempDir;

    fn reserve(id: &str) -> Command {
        Command::Reserve(ReserveArgs {
            id: id.to_string(),
            customer: "C001".to_string(),
            hotel: "H001".to_string(),
            check_in: "2026-03-01".to_string(),
            check_out: "2026-03-05".to_string(),
        })
    }

    #[test]
    fn test_commands_drive_the_store() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = HotelStore::open_local(temp_dir.path()).unwrap();

        execute(
            &mut store,
            Command::Hotel {
                action: HotelAction::Add(HotelArgs {
                    id: "H001".to_string(),
                    name: "Grand Plaza Hotel".to_string(),
                    location: "New York".to_string(),
                    rooms: 1,
                    price: 150.0,
                }),
            },
        )
        .unwrap();
        execute(
            &mut store,
            Command::Customer {
                action: CustomerAction::Add(CustomerArgs {
                    id: "C001".to_string(),
                    name: "John Smith".to_string(),
                    email: "john@example.com".to_string(),
                    phone: "555-1001".to_string(),
                }),
            },
        )
        .unwrap();

        execute(&mut store, reserve("R001")).unwrap();
        let err = execute(&mut store, reserve("R002")).unwrap_err();
        assert!(matches!(err, HotelSystemError::CapacityError { .. }));

        let lines = execute(
            &mut store,
            Command::Cancel {
                reservation_id: "R001".to_string(),
            },
        )
        .unwrap();
        assert!(lines[0].contains("Status: cancelled"));

        let lines = execute(
            &mut store,
            Command::Reservations {
                hotel: Some("H001".to_string()),
                customer: None,
            },
        )
        .unwrap();
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_bad_dates_fail_before_touching_store() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = HotelStore::open_local(temp_dir.path()).unwrap();

        let err = execute(
            &mut store,
            Command::Reserve(ReserveArgs {
                id: "R001".to_string(),
                customer: "C001".to_string(),
                hotel: "H001".to_string(),
                check_in: "tomorrow".to_string(),
                check_out: "2026-03-05".to_string(),
            }),
        )
        .unwrap_err();
        assert!(matches!(err, HotelSystemError::ValidationError { ref field, .. } if field == "check_in"));
    }

    #[test]
    fn test_empty_listing_and_missing_record() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = HotelStore::open_local(temp_dir.path()).unwrap();

        let lines = execute(&mut store, Command::Hotel { action: HotelAction::List }).unwrap();
        assert_eq!(lines, vec!["No hotel records".to_string()]);

        let err = execute(
            &mut store,
            Command::Customer {
                action: CustomerAction::Show {
                    customer_id: "C404".to_string(),
                },
            },
        )
        .unwrap_err();
        assert!(matches!(err, HotelSystemError::NotFoundError { .. }));
    }
}
