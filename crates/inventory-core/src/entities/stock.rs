//! Stock adjustments - increase/decrease operations on a product's quantity

use crate::error::DomainError;
use crate::value_objects::ProductId;

use super::audit_log::{AuditChange, DecreasedStock, IncreasedStock, StockLevel};
use super::product::Product;

/// Direction of a stock adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockDirection {
    Increase,
    Decrease,
}

impl StockDirection {
    /// Get the direction name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
        }
    }

    /// Signed change to apply to the stored quantity
    pub fn delta(&self, amount: i64) -> i64 {
        match self {
            Self::Increase => amount,
            Self::Decrease => -amount,
        }
    }
}

/// A validated, not yet persisted change to a product's stock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockAdjustment {
    pub product_id: ProductId,
    pub direction: StockDirection,
    pub amount: i64,
    pub previous_quantity: i64,
    pub new_quantity: i64,
}

impl StockAdjustment {
    /// Plan an adjustment against the product's current stock.
    ///
    /// # Errors
    /// - `ValidationError` if `amount` is not strictly positive or the result overflows
    /// - `InsufficientStock` if a decrease exceeds the current quantity
    pub fn plan(
        product: &Product,
        direction: StockDirection,
        amount: i64,
    ) -> Result<Self, DomainError> {
        if amount <= 0 {
            return Err(DomainError::ValidationError(
                "Amount must be a positive number".to_string(),
            ));
        }

        let new_quantity = match direction {
            StockDirection::Increase => product
                .stock_quantity
                .checked_add(amount)
                .ok_or_else(|| {
                    DomainError::ValidationError("Amount exceeds the supported stock range".to_string())
                })?,
            StockDirection::Decrease => {
                if amount > product.stock_quantity {
                    return Err(DomainError::InsufficientStock {
                        current_stock: product.stock_quantity,
                        requested_amount: amount,
                    });
                }
                product.stock_quantity - amount
            }
        };

        Ok(Self {
            product_id: product.id,
            direction,
            amount,
            previous_quantity: product.stock_quantity,
            new_quantity,
        })
    }

    /// Rebase the adjustment onto the quantity the store actually held.
    ///
    /// Used when the store applied the delta to a value that changed between
    /// the read and the write.
    pub fn settled_at(mut self, new_quantity: i64) -> Self {
        self.new_quantity = new_quantity;
        self.previous_quantity = new_quantity - self.direction.delta(self.amount);
        self
    }

    /// Audit payload describing this adjustment
    pub fn audit_change(&self) -> AuditChange {
        let old_values = StockLevel {
            stock_quantity: self.previous_quantity,
        };
        match self.direction {
            StockDirection::Increase => AuditChange::StockIncrease {
                old_values,
                new_values: IncreasedStock {
                    stock_quantity: self.new_quantity,
                    amount_increased: self.amount,
                },
            },
            StockDirection::Decrease => AuditChange::StockDecrease {
                old_values,
                new_values: DecreasedStock {
                    stock_quantity: self.new_quantity,
                    amount_decreased: self.amount,
                },
            },
        }
    }
}
