//! Third-party order fixtures.

use speedai_db::models::integration::IntegrationOrder;

use super::ts;

fn order(
    id: i64,
    source: &str,
    external_id: &str,
    amount_cents: i64,
    status: &str,
    channel: &str,
    created_at: speedai_core::types::Timestamp,
) -> IntegrationOrder {
    IntegrationOrder {
        id,
        source: source.to_string(),
        external_id: external_id.to_string(),
        amount_cents,
        status: status.to_string(),
        channel: channel.to_string(),
        created_at,
    }
}

/// Relayed delivery-platform orders, newest first.
pub fn orders() -> Vec<IntegrationOrder> {
    vec![
        order(12, "ubereats", "UE-88412-FR", 4350, "preparing", "delivery", ts(2026, 8, 21, 19, 48)),
        order(11, "deliveroo", "DR-57209", 6780, "received", "delivery", ts(2026, 8, 21, 19, 21)),
        order(10, "ubereats", "UE-88127-FR", 2890, "delivered", "delivery", ts(2026, 8, 21, 13, 2)),
        order(9, "justeat", "JE-410238", 5240, "delivered", "pickup", ts(2026, 8, 20, 20, 17)),
        order(8, "deliveroo", "DR-56841", 3460, "delivered", "delivery", ts(2026, 8, 20, 19, 39)),
        order(7, "ubereats", "UE-87903-FR", 7125, "delivered", "delivery", ts(2026, 8, 20, 12, 54)),
        order(6, "deliveroo", "DR-56512", 4980, "canceled", "delivery", ts(2026, 8, 19, 20, 8)),
        order(5, "justeat", "JE-409771", 3150, "delivered", "pickup", ts(2026, 8, 19, 13, 26)),
        order(4, "ubereats", "UE-87544-FR", 5620, "delivered", "delivery", ts(2026, 8, 18, 19, 57)),
        order(3, "deliveroo", "DR-56098", 2740, "delivered", "delivery", ts(2026, 8, 18, 12, 41)),
        order(2, "ubereats", "UE-87231-FR", 6390, "delivered", "delivery", ts(2026, 8, 17, 20, 12)),
        order(1, "justeat", "JE-409204", 4110, "delivered", "delivery", ts(2026, 8, 17, 12, 35)),
    ]
}
