//! Waitlist fixtures.

use speedai_db::models::waitlist::WaitlistEntry;

use super::ts;

fn entry(
    id: i64,
    customer_name: &str,
    phone_number: &str,
    party_size: i32,
    status: &str,
    joined_at: speedai_core::types::Timestamp,
) -> WaitlistEntry {
    WaitlistEntry {
        id,
        customer_name: customer_name.to_string(),
        phone_number: phone_number.to_string(),
        party_size,
        status: status.to_string(),
        joined_at,
    }
}

/// Tonight's waitlist in arrival order.
pub fn entries() -> Vec<WaitlistEntry> {
    vec![
        entry(1, "Paul Girard", "+33 6 58 12 47 93", 4, "seated", ts(2026, 8, 21, 19, 10)),
        entry(2, "Lucie Arnaud", "+33 7 24 86 53 19", 2, "seated", ts(2026, 8, 21, 19, 24)),
        entry(3, "Karim Bensaïd", "+33 6 71 39 84 26", 3, "notified", ts(2026, 8, 21, 19, 41)),
        entry(4, "Emma Vasseur", "+33 6 47 92 15 68", 2, "waiting", ts(2026, 8, 21, 19, 58)),
        entry(5, "Jean-Marc Teissier", "+33 7 83 46 21 57", 6, "waiting", ts(2026, 8, 21, 20, 6)),
        entry(6, "Sofia Moreno", "+33 6 19 75 38 42", 2, "left", ts(2026, 8, 21, 20, 19)),
    ]
}
