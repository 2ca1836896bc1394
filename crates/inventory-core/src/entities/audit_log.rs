//! Audit log entity - immutable record of one state-changing operation
//!
//! The before/after payloads form a closed set keyed by `action_type`, so
//! every entry serializes to exactly one known shape:
//!
//! | action_type      | old_values        | new_values                                |
//! |------------------|-------------------|-------------------------------------------|
//! | `CREATE`         | -                 | full product                              |
//! | `UPDATE`         | full product      | full product                              |
//! | `DELETE`         | full product      | -                                         |
//! | `STOCK_INCREASE` | `stock_quantity`  | `stock_quantity`, `amount_increased`      |
//! | `STOCK_DECREASE` | `stock_quantity`  | `stock_quantity`, `amount_decreased`      |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::{AuditLogId, ProductId};

use super::product::Product;

/// Kind of state change recorded by an audit entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    StockIncrease,
    StockDecrease,
}

impl AuditAction {
    /// All actions, in declaration order
    pub const ALL: [Self; 5] = [
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::StockIncrease,
        Self::StockDecrease,
    ];

    /// Get the stored / wire name of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::StockIncrease => "STOCK_INCREASE",
            Self::StockDecrease => "STOCK_DECREASE",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| DomainError::InternalError(format!("unknown audit action: {s}")))
    }
}

/// Full product record as captured in the audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub stock_quantity: i64,
    pub low_stock_threshold: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            stock_quantity: product.stock_quantity,
            low_stock_threshold: product.low_stock_threshold,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Stock level before an adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub stock_quantity: i64,
}

/// Stock level after an increase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncreasedStock {
    pub stock_quantity: i64,
    pub amount_increased: i64,
}

/// Stock level after a decrease
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecreasedStock {
    pub stock_quantity: i64,
    pub amount_decreased: i64,
}

/// Before/after payload of an audit entry, tagged by action type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditChange {
    Create {
        new_values: ProductSnapshot,
    },
    Update {
        old_values: ProductSnapshot,
        new_values: ProductSnapshot,
    },
    Delete {
        old_values: ProductSnapshot,
    },
    StockIncrease {
        old_values: StockLevel,
        new_values: IncreasedStock,
    },
    StockDecrease {
        old_values: StockLevel,
        new_values: DecreasedStock,
    },
}

impl AuditChange {
    /// Get the action this change records
    pub fn action(&self) -> AuditAction {
        match self {
            Self::Create { .. } => AuditAction::Create,
            Self::Update { .. } => AuditAction::Update,
            Self::Delete { .. } => AuditAction::Delete,
            Self::StockIncrease { .. } => AuditAction::StockIncrease,
            Self::StockDecrease { .. } => AuditAction::StockDecrease,
        }
    }

    /// Split into `(action, old_values, new_values)` for storage
    pub fn to_parts(
        &self,
    ) -> Result<(AuditAction, Option<JsonValue>, Option<JsonValue>), DomainError> {
        let value = serde_json::to_value(self)
            .map_err(|e| DomainError::InternalError(format!("audit payload encoding: {e}")))?;
        let JsonValue::Object(mut map) = value else {
            return Err(DomainError::InternalError(
                "audit payload did not encode as an object".to_string(),
            ));
        };

        Ok((
            self.action(),
            map.remove("old_values"),
            map.remove("new_values"),
        ))
    }

    /// Rebuild a change from its stored parts.
    ///
    /// Fails if the payload does not match the shape required by `action`.
    pub fn from_parts(
        action: AuditAction,
        old_values: Option<JsonValue>,
        new_values: Option<JsonValue>,
    ) -> Result<Self, DomainError> {
        let mut map = Map::new();
        map.insert(
            "action_type".to_string(),
            JsonValue::String(action.as_str().to_string()),
        );
        if let Some(old) = old_values {
            map.insert("old_values".to_string(), old);
        }
        if let Some(new) = new_values {
            map.insert("new_values".to_string(), new);
        }

        serde_json::from_value(JsonValue::Object(map)).map_err(|e| {
            DomainError::InternalError(format!("malformed {action} audit payload: {e}"))
        })
    }
}

/// Audit log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogEntry {
    pub id: AuditLogId,
    /// Weak reference: the product may since have been deleted
    pub product_id: ProductId,
    pub change: AuditChange,
    pub timestamp: DateTime<Utc>,
}

impl AuditLogEntry {
    /// Create a new entry stamped with the current time
    pub fn new(product_id: ProductId, change: AuditChange) -> Self {
        Self {
            id: AuditLogId::generate(),
            product_id,
            change,
            timestamp: super::timestamp_now(),
        }
    }

    /// Entry for a freshly created product
    pub fn created(product: &Product) -> Self {
        Self::new(
            product.id,
            AuditChange::Create {
                new_values: product.snapshot(),
            },
        )
    }

    /// Entry for a field update
    pub fn updated(before: &Product, after: &Product) -> Self {
        Self::new(
            after.id,
            AuditChange::Update {
                old_values: before.snapshot(),
                new_values: after.snapshot(),
            },
        )
    }

    /// Entry for a deleted product
    pub fn deleted(product: &Product) -> Self {
        Self::new(
            product.id,
            AuditChange::Delete {
                old_values: product.snapshot(),
            },
        )
    }

    #[inline]
    pub fn action(&self) -> AuditAction {
        self.change.action()
    }
}
