//! Orders domain module.
//!
//! An order collects products, keeps a running total of their properties and
//! can be paid for exactly once, after which it is frozen. The business
//! rules are deterministic domain logic (no IO, no storage, no printing).

pub mod order;
pub mod summary;

pub use order::{
    AddProduct, DeleteAt, DeleteLine, LineId, Order, OrderCommand, OrderEvent, OrderId, OrderLine,
    OrderPaid, OrderStatus, PayFor, ProductAdded, ProductRemoved,
};
pub use summary::{LineSummary, OrderSummary};
