use contracts::shared::list_view::ValidationError;
use thiserror::Error;

/// Everything a list page can fail with. Caught at the page boundary and
/// shown as a single banner with a retry button.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListViewError {
    /// Request never got a response
    #[error("Erreur réseau : {0}")]
    Network(String),

    /// Response body was not a collection envelope; the list shows as empty
    #[error("Réponse inattendue du serveur : {0}")]
    Format(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Non-2xx answer, message taken from the body when there is one
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// Flag toggle asked on a page without a flag column
    #[error("Cette liste n'a pas de champ d'activation")]
    NoFlagField,

    /// Delete confirmation does not match the pending request
    #[error("Aucune suppression en attente de confirmation")]
    NoPendingConfirmation,
}

impl ListViewError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ListViewError::Validation(_))
    }
}
