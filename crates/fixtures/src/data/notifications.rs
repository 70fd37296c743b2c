//! Notification fixtures — one record per kind so the client's icon and
//! routing map can be exercised end to end.

use speedai_db::models::notification::{NotificationKind, NotificationRecord};

use super::ts;

fn notif(
    id: i64,
    kind: NotificationKind,
    title: &str,
    message: &str,
    is_read: bool,
    created_at: speedai_core::types::Timestamp,
) -> NotificationRecord {
    NotificationRecord {
        id,
        kind,
        title: title.to_string(),
        message: message.to_string(),
        is_read,
        created_at,
    }
}

/// The demo notification feed, newest first. The five most recent are
/// unread.
pub fn notifications() -> Vec<NotificationRecord> {
    use NotificationKind::*;

    vec![
        notif(18, NewCall, "Nouvel appel", "Appel de +33 6 12 45 78 23 : réservation pour 4 personnes samedi.", false, ts(2026, 8, 21, 18, 43)),
        notif(17, NewOrder, "Nouvelle commande Uber Eats", "Commande UE-88412-FR de 43,50 € en préparation.", false, ts(2026, 8, 21, 19, 49)),
        notif(16, MissedCall, "Appel manqué", "Appel manqué de +33 6 44 91 12 07, rappel automatique programmé.", false, ts(2026, 8, 21, 14, 4)),
        notif(15, NewReview, "Nouvel avis Google", "Camille Berthier a laissé un avis 5 étoiles.", false, ts(2026, 8, 20, 21, 15)),
        notif(14, NoShowCharged, "No-show facturé", "La réservation de David Nguyen a été facturée 40,00 €.", false, ts(2026, 8, 19, 21, 31)),
        notif(13, WaitlistJoined, "Liste d'attente", "Paul Girard a rejoint la liste d'attente pour 4 personnes.", true, ts(2026, 8, 19, 19, 12)),
        notif(12, CampaignSent, "Campagne envoyée", "« Rappel réservation week-end du 15 août » envoyée à 342 contacts.", true, ts(2026, 8, 13, 10, 0)),
        notif(11, NoShowDispute, "Litige sur facturation", "Frédéric Albin conteste la facturation du 12 août.", true, ts(2026, 8, 13, 9, 24)),
        notif(10, NegativeReview, "Avis négatif", "Marc Dubois a laissé un avis 2 étoiles sur Google.", true, ts(2026, 8, 17, 22, 9)),
        notif(9, ReportReady, "Rapport mensuel disponible", "Votre rapport de juin 2026 est prêt à être consulté.", true, ts(2026, 7, 2, 6, 1)),
        notif(8, PaymentSucceeded, "Paiement reçu", "Abonnement Pro : paiement de 89,00 € effectué.", true, ts(2026, 8, 1, 8, 0)),
        notif(7, CampaignCompleted, "Campagne terminée", "« Offre fidélité : dessert offert » : 806 ouvertures sur 1721 envois.", true, ts(2026, 7, 28, 18, 30)),
        notif(6, IntegrationConnected, "Intégration activée", "Just Eat est maintenant connecté à votre tableau de bord.", true, ts(2026, 7, 21, 15, 47)),
        notif(5, SubscriptionRenewed, "Abonnement renouvelé", "Votre abonnement Pro a été renouvelé jusqu'au 1er septembre.", true, ts(2026, 8, 1, 8, 1)),
        notif(4, ReportFailed, "Échec de génération", "Le rapport d'avril 2026 n'a pas pu être généré, nouvel essai prévu.", true, ts(2026, 5, 2, 6, 15)),
        notif(3, IntegrationError, "Erreur d'intégration", "Synchronisation Deliveroo interrompue pendant 25 minutes.", true, ts(2026, 7, 9, 12, 8)),
        notif(2, PaymentFailed, "Échec de paiement", "Le prélèvement de juillet a échoué, carte expirée.", true, ts(2026, 7, 1, 8, 0)),
        notif(1, SubscriptionCanceled, "Résiliation programmée", "Votre ancienne formule Starter prendra fin le 30 juin.", true, ts(2026, 6, 15, 11, 42)),
    ]
}
