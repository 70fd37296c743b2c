#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A single-resource lookup missed. The message is the user-facing
    /// (French) text the client renders verbatim, e.g. "Appel non trouvé".
    #[error("{message}")]
    NotFound { message: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Not-found error for a call record.
    pub fn call_not_found() -> Self {
        CoreError::NotFound {
            message: "Appel non trouvé",
        }
    }

    /// Not-found error for a review record.
    pub fn review_not_found() -> Self {
        CoreError::NotFound {
            message: "Avis non trouvé",
        }
    }

    /// Not-found error for a notification record.
    pub fn notification_not_found() -> Self {
        CoreError::NotFound {
            message: "Notification non trouvée",
        }
    }
}
