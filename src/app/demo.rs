use crate::core::HotelStore;
use crate::domain::{Customer, Hotel, Reservation};
use crate::utils::error::{HotelSystemError, Result};
use chrono::NaiveDate;

fn header(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push("=".repeat(70));
    lines.push(format!("  {}", title));
    lines.push("=".repeat(70));
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        HotelSystemError::validation("date", format!("{}-{}-{} is not a calendar date", year, month, day))
    })
}

/// Clears the store and replays the sample walkthrough.
pub fn run(store: &mut HotelStore) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    store.clear_all()?;

    header(&mut lines, "Hotel Management Demo");
    store.create(Hotel::new("H001", "Grand Plaza Hotel", "New York", 100, 150.0)?)?;
    store.create(Hotel::new("H002", "Beach Resort", "Miami", 50, 200.0)?)?;
    if let Some(hotel) = store.read::<Hotel>("H001") {
        lines.push(format!("✓ Retrieved: {}", hotel));
    }
    for hotel in store.list::<Hotel>() {
        lines.push(format!("  - {}", hotel));
    }

    header(&mut lines, "Customer Management Demo");
    store.create(Customer::new("C001", "John Smith", "john@example.com", "555-1001")?)?;
    store.create(Customer::new("C002", "Maria Garcia", "maria@example.com", "555-1002")?)?;
    if let Some(customer) = store.read::<Customer>("C001") {
        lines.push(format!("✓ Retrieved: {}", customer));
    }

    header(&mut lines, "Reservation Management Demo");
    store.create(Reservation::new("R001", "C001", "H001", date(2026, 3, 1)?, date(2026, 3, 5)?)?)?;
    store.create(Reservation::new("R002", "C002", "H002", date(2026, 3, 10)?, date(2026, 3, 15)?)?)?;
    for reservation in store.list::<Reservation>() {
        lines.push(format!("  - {}", reservation));
    }
    if let Some(hotel) = store.read::<Hotel>("H001") {
        lines.push(format!("✓ After booking: {}", hotel));
    }

    header(&mut lines, "Error Handling Demo");
    match Customer::new("C999", "No Email", "invalid-email", "555-0000") {
        Err(e) => lines.push(format!("✓ Invalid email detected - {}", e)),
        Ok(_) => lines.push("✗ Invalid email was accepted".to_string()),
    }
    match store.delete::<Hotel>("H001") {
        Err(e) => lines.push(format!("✓ Delete blocked - {}", e)),
        Ok(_) => lines.push("✗ Hotel with an active reservation was deleted".to_string()),
    }

    lines.push(String::new());
    lines.push("=".repeat(70));
    lines.push("  DEMONSTRATION COMPLETED SUCCESSFULLY".to_string());
    lines.push("=".repeat(70));
    Ok(lines)
}
