use thiserror::Error;

use crate::domain::EntityKind;
use crate::domain::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("{kind} not found: id {id}")]
    NotFound { kind: EntityKind, id: i64 },

    #[error("no {0} form is open")]
    NoActiveForm(EntityKind),

    #[error("no confirmation dialog is open")]
    NoActiveDialog,

    #[error("data is not loaded")]
    NotReady,

    #[error("unknown field: {0}")]
    UnknownField(String),
}
