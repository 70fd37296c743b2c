//! Account and settings fixtures.

use speedai_db::models::account::{BusinessSettings, UserAccount};

use super::ts;

/// The demo tenant's owner account.
pub fn user() -> UserAccount {
    UserAccount {
        id: 1,
        email: "contact@levieuxmoulin.fr".to_string(),
        business_name: "Le Vieux Moulin".to_string(),
        plan: "pro".to_string(),
        created_at: ts(2025, 11, 3, 9, 30),
    }
}

/// The demo tenant's settings.
pub fn settings() -> BusinessSettings {
    BusinessSettings {
        language: "fr".to_string(),
        timezone: "Europe/Paris".to_string(),
        notifications_enabled: true,
        guarantee_enabled: true,
        guarantee_amount_cents: 2000,
        opening_hours: "Mardi au samedi 12h-14h30 et 19h-22h30, dimanche 12h-15h".to_string(),
    }
}
