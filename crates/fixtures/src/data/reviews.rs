//! Review fixtures.

use speedai_db::models::review::ReviewRecord;

use super::ts;

fn review(
    id: i64,
    platform: &str,
    rating: i32,
    author: &str,
    content: &str,
    created_at: speedai_core::types::Timestamp,
) -> ReviewRecord {
    ReviewRecord {
        id,
        platform: platform.to_string(),
        rating,
        author: author.to_string(),
        content: content.to_string(),
        created_at,
    }
}

/// The demo review feed, newest first.
pub fn reviews() -> Vec<ReviewRecord> {
    vec![
        review(1, "google", 5, "Camille Berthier", "Une soirée parfaite, la quenelle de brochet est exceptionnelle. Service attentionné du début à la fin.", ts(2026, 8, 20, 21, 14)),
        review(2, "google", 4, "Julien Mercier", "Très bonne table, cadre magnifique au bord de la Saône. Un peu d'attente entre les plats.", ts(2026, 8, 19, 20, 2)),
        review(3, "tripadvisor", 5, "Anne-Sophie Laurent", "Le menu dégustation vaut le détour. Accord mets et vins remarquable.", ts(2026, 8, 18, 19, 37)),
        review(4, "google", 2, "Marc Dubois", "Déçu par le service du samedi soir, trop de monde et plats tièdes.", ts(2026, 8, 17, 22, 8)),
        review(5, "facebook", 5, "Élodie Garnier", "Réservé par téléphone en deux minutes, accueil impeccable. On reviendra !", ts(2026, 8, 16, 13, 45)),
        review(6, "google", 5, "Thomas Rey", "La terrasse est superbe en été. Tarte pralinée à ne pas manquer.", ts(2026, 8, 14, 20, 51)),
        review(7, "tripadvisor", 4, "Nathalie Comte", "Belle découverte pour un déjeuner d'affaires, menu du midi d'un excellent rapport qualité-prix.", ts(2026, 8, 12, 14, 22)),
        review(8, "google", 3, "Pierre Lemoine", "Correct sans plus, l'addition grimpe vite avec les vins.", ts(2026, 8, 10, 21, 33)),
        review(9, "facebook", 4, "Sandrine Vidal", "Très bon accueil pour notre groupe de 12, menus adaptés sans difficulté.", ts(2026, 8, 8, 15, 17)),
        review(10, "google", 5, "Hugo Perrin", "Anniversaire de mariage réussi, attention délicate du chef en fin de repas.", ts(2026, 8, 6, 22, 4)),
        review(11, "tripadvisor", 3, "Isabelle Fabre", "Cuisine soignée mais salle bruyante le vendredi soir.", ts(2026, 8, 3, 20, 46)),
        review(12, "google", 4, "Romain Chazal", "Produits frais et carte courte, c'est bon signe. Réservation conseillée.", ts(2026, 7, 30, 19, 28)),
        review(13, "google", 1, "Kevin Morel", "Réservation introuvable à notre arrivée, aucune table disponible. Inadmissible.", ts(2026, 7, 27, 20, 39)),
        review(14, "facebook", 5, "Laure Bonnet", "Le brunch du dimanche est devenu notre rituel. Équipe adorable.", ts(2026, 7, 24, 12, 9)),
        review(15, "tripadvisor", 5, "Olivier Santini", "Un classique lyonnais revisité avec talent. Cave remarquable.", ts(2026, 7, 20, 21, 56)),
        review(16, "google", 4, "Mélanie Roche", "Très bon menu végétarien, rare pour ce type de maison.", ts(2026, 7, 16, 13, 31)),
    ]
}
