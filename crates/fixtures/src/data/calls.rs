//! Call log fixtures.

use speedai_db::models::call::{CallRecord, CallStats};

use super::ts;

fn call(
    id: i64,
    phone_number: &str,
    status: &str,
    duration_seconds: i32,
    converted: bool,
    summary: &str,
    created_at: speedai_core::types::Timestamp,
) -> CallRecord {
    CallRecord {
        id,
        phone_number: phone_number.to_string(),
        status: status.to_string(),
        duration_seconds,
        converted,
        summary: summary.to_string(),
        created_at,
    }
}

/// The demo call log, newest first.
pub fn calls() -> Vec<CallRecord> {
    vec![
        call(1, "+33 6 12 45 78 23", "answered", 142, true, "Réservation pour 4 personnes samedi 20h30, terrasse demandée", ts(2026, 8, 21, 18, 42)),
        call(2, "+33 7 81 02 34 56", "answered", 96, true, "Réservation pour 2 personnes ce soir 19h30", ts(2026, 8, 21, 16, 15)),
        call(3, "+33 6 44 91 12 07", "missed", 0, false, "Appel manqué, rappel automatique programmé", ts(2026, 8, 21, 14, 3)),
        call(4, "+33 6 98 23 65 41", "answered", 238, false, "Question sur le menu végétarien, enverra un e-mail pour un groupe", ts(2026, 8, 21, 11, 27)),
        call(5, "+33 7 66 54 38 92", "answered", 87, true, "Réservation pour 6 personnes vendredi 12h30, anniversaire", ts(2026, 8, 20, 19, 54)),
        call(6, "+33 6 21 76 43 18", "voicemail", 34, false, "Message vocal : demande de privatisation pour 30 personnes", ts(2026, 8, 20, 17, 21)),
        call(7, "+33 6 75 12 89 34", "answered", 154, true, "Réservation pour 3 personnes dimanche midi", ts(2026, 8, 20, 15, 48)),
        call(8, "+33 7 52 43 76 10", "answered", 73, false, "Demande d'horaires d'ouverture du lundi", ts(2026, 8, 20, 12, 36)),
        call(9, "+33 6 33 87 21 65", "answered", 201, true, "Réservation pour 8 personnes samedi 13h, menu dégustation", ts(2026, 8, 20, 10, 12)),
        call(10, "+33 6 90 54 17 83", "missed", 0, false, "Appel manqué hors horaires d'ouverture", ts(2026, 8, 19, 22, 47)),
        call(11, "+33 7 43 29 85 61", "answered", 118, true, "Réservation pour 2 personnes mercredi 20h", ts(2026, 8, 19, 18, 33)),
        call(12, "+33 6 57 38 94 72", "answered", 95, false, "Annulation de la réservation de jeudi soir", ts(2026, 8, 19, 16, 9)),
        call(13, "+33 6 82 65 31 49", "answered", 167, true, "Réservation pour 5 personnes vendredi 19h45, chaise bébé", ts(2026, 8, 19, 13, 55)),
        call(14, "+33 7 91 47 26 58", "voicemail", 41, false, "Message vocal : question sur les allergènes du menu", ts(2026, 8, 19, 11, 18)),
        call(15, "+33 6 14 72 58 36", "answered", 129, true, "Réservation pour 4 personnes samedi 12h15", ts(2026, 8, 18, 20, 26)),
        call(16, "+33 6 68 93 41 27", "answered", 84, false, "Demande d'itinéraire depuis la gare Part-Dieu", ts(2026, 8, 18, 17, 44)),
        call(17, "+33 7 25 81 63 94", "answered", 176, true, "Réservation pour 2 personnes ce soir, table près de la fenêtre", ts(2026, 8, 18, 15, 2)),
        call(18, "+33 6 49 17 85 32", "missed", 0, false, "Appel manqué pendant le service du midi", ts(2026, 8, 18, 12, 51)),
        call(19, "+33 6 73 56 29 84", "answered", 112, true, "Réservation pour 6 personnes dimanche 12h30", ts(2026, 8, 18, 10, 37)),
        call(20, "+33 7 38 64 92 15", "answered", 58, false, "Question sur le parking à proximité", ts(2026, 8, 17, 19, 29)),
        call(21, "+33 6 85 41 73 26", "answered", 193, true, "Réservation pour 4 personnes mardi 20h15, menu sans gluten", ts(2026, 8, 17, 17, 6)),
        call(22, "+33 6 52 98 36 71", "answered", 77, true, "Réservation pour 2 personnes jeudi 19h", ts(2026, 8, 17, 14, 23)),
        call(23, "+33 7 69 24 81 53", "voicemail", 28, false, "Message vocal : demande de devis traiteur", ts(2026, 8, 17, 11, 58)),
        call(24, "+33 6 31 79 46 82", "answered", 104, false, "Modification de réservation : 4 personnes au lieu de 2", ts(2026, 8, 16, 20, 41)),
        call(25, "+33 6 94 62 38 17", "answered", 139, true, "Réservation pour 3 personnes samedi 21h", ts(2026, 8, 16, 18, 14)),
        call(26, "+33 7 17 53 89 46", "missed", 0, false, "Appel manqué, numéro masqué", ts(2026, 8, 16, 15, 32)),
        call(27, "+33 6 26 84 57 93", "answered", 88, true, "Réservation pour 2 personnes vendredi 13h", ts(2026, 8, 16, 12, 19)),
        call(28, "+33 6 61 35 92 74", "answered", 215, true, "Réservation de groupe pour 10 personnes, acompte évoqué", ts(2026, 8, 16, 9, 47)),
    ]
}

/// Weekly aggregate baseline for the stats endpoint.
///
/// Deliberately larger than the visible log: the list above is the recent
/// page of a much bigger history, as it would be for a live tenant.
pub fn base_stats() -> CallStats {
    CallStats {
        total_calls: 247,
        answered_calls: 214,
        missed_calls: 33,
        conversion_rate: 0.42,
        avg_duration_seconds: 131.0,
    }
}
