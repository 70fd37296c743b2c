//! Recommendation fixtures.

use speedai_db::models::recommendation::Recommendation;

fn rec(id: i64, title: &str, description: &str, category: &str, priority: i32) -> Recommendation {
    Recommendation {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        priority,
    }
}

/// Suggested actions for the dashboard home page, highest priority first.
pub fn recommendations() -> Vec<Recommendation> {
    vec![
        rec(1, "Répondez à l'avis de Marc Dubois", "Un avis 2 étoiles sans réponse depuis 4 jours pèse sur votre note Google.", "reviews", 1),
        rec(2, "Activez la garantie no-show le samedi", "3 no-shows ce mois-ci concernaient des tables de 4 ou plus le samedi soir.", "guarantee", 2),
        rec(3, "Relancez vos contacts inactifs", "612 contacts n'ont reçu aucune campagne depuis 90 jours.", "marketing", 3),
        rec(4, "Ajoutez vos horaires de jours fériés", "L'assistant vocal ne connaît pas vos horaires du 15 août prochain.", "settings", 4),
        rec(5, "Mettez en avant le brunch du dimanche", "Vos avis mentionnant le brunch ont une note moyenne de 4,8.", "marketing", 5),
    ]
}
