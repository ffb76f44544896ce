//! Read-only snapshot of an order for presentation layers.

use serde::{Deserialize, Serialize};

use calcorder_products::MenuItem;

use crate::order::{LineId, Order, OrderId, OrderStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSummary {
    /// 1-based position in the order.
    pub position: usize,
    pub line_id: LineId,
    pub kind: String,
    pub description: String,
    pub energy: f64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub lines: Vec<LineSummary>,
    pub energy: f64,
    pub price: f64,
}

impl Order {
    pub fn summary(&self) -> OrderSummary {
        let lines = self
            .lines()
            .iter()
            .enumerate()
            .map(|(index, line)| LineSummary {
                position: index + 1,
                line_id: line.line_id,
                kind: line.product.kind_name().to_string(),
                description: line.product.to_string(),
                energy: line.product.energy(),
                price: line.product.price(),
            })
            .collect();

        OrderSummary {
            order_id: self.id_typed(),
            status: self.status(),
            lines,
            energy: self.energy(),
            price: self.price(),
        }
    }
}
