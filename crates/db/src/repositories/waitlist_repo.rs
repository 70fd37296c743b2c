//! Repository for the `waitlist_entries` table.

use sqlx::PgPool;
use speedai_core::types::DbId;

use crate::models::waitlist::WaitlistEntry;

/// Read operations over the waitlist.
pub struct WaitlistRepo;

impl WaitlistRepo {
    /// List waitlist entries in arrival order.
    pub async fn list(pool: &PgPool, business_id: DbId) -> Result<Vec<WaitlistEntry>, sqlx::Error> {
        sqlx::query_as::<_, WaitlistEntry>(
            "SELECT id, customer_name, phone_number, party_size, status, joined_at \
             FROM waitlist_entries WHERE business_id = $1 ORDER BY joined_at ASC",
        )
        .bind(business_id)
        .fetch_all(pool)
        .await
    }
}
