//! No-show guarantee fixtures.

use speedai_db::models::guarantee::{GuaranteeSession, NoShowCharge};

use super::ts;

fn session(
    id: i64,
    customer_name: &str,
    phone_number: &str,
    reservation_at: speedai_core::types::Timestamp,
    party_size: i32,
    status: &str,
    payment_status: &str,
    amount_cents: i64,
) -> GuaranteeSession {
    GuaranteeSession {
        id,
        customer_name: customer_name.to_string(),
        phone_number: phone_number.to_string(),
        reservation_at,
        party_size,
        status: status.to_string(),
        payment_status: payment_status.to_string(),
        amount_cents,
    }
}

/// Protected reservations, upcoming first.
pub fn sessions() -> Vec<GuaranteeSession> {
    vec![
        session(8, "Claire Fontaine", "+33 6 45 82 19 37", ts(2026, 8, 23, 18, 30), 4, "confirmed", "card_saved", 8000),
        session(7, "Bruno Lacombe", "+33 7 12 98 45 63", ts(2026, 8, 22, 17, 45), 2, "confirmed", "card_saved", 4000),
        session(6, "Aurélie Masson", "+33 6 78 34 51 29", ts(2026, 8, 21, 18, 15), 6, "completed", "card_saved", 12000),
        session(5, "David Nguyen", "+33 6 23 67 48 91", ts(2026, 8, 19, 17, 30), 2, "no_show", "charged", 4000),
        session(4, "Stéphanie Imbert", "+33 7 56 21 83 47", ts(2026, 8, 16, 19, 0), 8, "completed", "card_saved", 16000),
        session(3, "Frédéric Albin", "+33 6 89 43 72 15", ts(2026, 8, 12, 18, 45), 4, "no_show", "charged", 8000),
        session(2, "Margaux Delorme", "+33 6 34 58 96 12", ts(2026, 8, 9, 17, 15), 2, "canceled", "refunded", 4000),
        session(1, "Antoine Reverdy", "+33 7 67 25 14 89", ts(2026, 8, 5, 18, 0), 5, "completed", "card_saved", 10000),
    ]
}

fn charge(
    id: i64,
    session_id: i64,
    amount_cents: i64,
    status: &str,
    disputed: bool,
    charged_at: speedai_core::types::Timestamp,
) -> NoShowCharge {
    NoShowCharge {
        id,
        session_id,
        amount_cents,
        status: status.to_string(),
        disputed,
        charged_at,
    }
}

/// Charge outcomes for the no-show reservations above, newest first.
pub fn charges() -> Vec<NoShowCharge> {
    vec![
        charge(3, 5, 4000, "succeeded", false, ts(2026, 8, 19, 21, 30)),
        charge(2, 3, 8000, "succeeded", true, ts(2026, 8, 12, 22, 0)),
        charge(1, 3, 8000, "failed", false, ts(2026, 8, 12, 21, 45)),
    ]
}
