//! Inventory error model.

use core::fmt::Display;

use thiserror::Error;

/// Result type used across the inventory layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every failure is recoverable and carries enough context to report it.
/// Callers branch on [`InventoryError::kind`] rather than on messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// An item with the same id is already stored.
    #[error("an item with id {id} already exists")]
    DuplicateKey { id: String },

    /// No item with the given id is stored.
    #[error("no item found with id {id}")]
    NotFound { id: String },

    /// A quantity was set to, or would be derived as, a negative value.
    #[error("quantity cannot be negative (requested {requested})")]
    InvalidQuantity { requested: i64 },
}

/// Discriminant of [`InventoryError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateKey,
    NotFound,
    InvalidQuantity,
}

impl InventoryError {
    pub fn duplicate_key(id: impl Display) -> Self {
        Self::DuplicateKey { id: id.to_string() }
    }

    pub fn not_found(id: impl Display) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    pub fn invalid_quantity(requested: i64) -> Self {
        Self::InvalidQuantity { requested }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            InventoryError::NotFound { .. } => ErrorKind::NotFound,
            InventoryError::InvalidQuantity { .. } => ErrorKind::InvalidQuantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_map_to_matching_kind() {
        assert_eq!(InventoryError::duplicate_key(1).kind(), ErrorKind::DuplicateKey);
        assert_eq!(InventoryError::not_found(999).kind(), ErrorKind::NotFound);
        assert_eq!(InventoryError::invalid_quantity(-5).kind(), ErrorKind::InvalidQuantity);
    }

    #[test]
    fn messages_identify_the_offending_value() {
        assert_eq!(
            InventoryError::duplicate_key(1).to_string(),
            "an item with id 1 already exists"
        );
        assert_eq!(
            InventoryError::not_found(999).to_string(),
            "no item found with id 999"
        );
        assert_eq!(
            InventoryError::invalid_quantity(-5).to_string(),
            "quantity cannot be negative (requested -5)"
        );
    }
}
