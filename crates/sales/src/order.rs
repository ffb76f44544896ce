use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use calcorder_core::{
    Aggregate, AggregateId, AggregateRoot, DomainError, DomainResult, Notice, PropertySet,
};
use calcorder_events::Event;
use calcorder_products::{MenuItem, Product};

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub AggregateId);

impl OrderId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Handle for a line of an order, returned by [`Order::add`].
///
/// Handles are unique within one order and never reused, even after the
/// line they pointed to is deleted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(u32);

impl LineId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for LineId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "line #{}", self.0)
    }
}

/// Order status lifecycle. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Closed,
}

/// Order line: a product and the handle it was added under.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub line_id: LineId,
    pub product: Product,
}

/// Aggregate root: Order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    status: OrderStatus,
    lines: Vec<OrderLine>,
    total: PropertySet,
    // Wider than `LineId` so replaying `LineId(u32::MAX)` cannot overflow.
    next_line: u64,
    version: u64,
}

impl Order {
    /// A new, empty, open order.
    pub fn new() -> Self {
        Self::with_id(OrderId::new(AggregateId::new()))
    }

    pub fn with_id(id: OrderId) -> Self {
        Self {
            id,
            status: OrderStatus::Open,
            lines: Vec::new(),
            total: PropertySet::default(),
            next_line: 1,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Closed
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.lines.iter().map(|line| &line.product)
    }

    /// Line at a 1-based position.
    pub fn line(&self, position: usize) -> Option<&OrderLine> {
        position
            .checked_sub(1)
            .and_then(|index| self.lines.get(index))
    }

    /// 1-based position of the line with the given handle.
    pub fn position_of(&self, line_id: LineId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.line_id == line_id)
            .map(|index| index + 1)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Running total of every product currently in the order.
    pub fn total(&self) -> &PropertySet {
        &self.total
    }

    /// Energy, in calories.
    pub fn energy(&self) -> f64 {
        self.total.energy()
    }

    /// Price, in tugriks.
    pub fn price(&self) -> f64 {
        self.total.price()
    }

    /// Add a product, returning the handle of the new line.
    pub fn add(&mut self, product: impl Into<Product>) -> DomainResult<LineId> {
        self.ensure_open()?;
        let line_id = self.next_line_id()?;
        self.execute(&OrderCommand::AddProduct(AddProduct {
            product: product.into(),
            occurred_at: Utc::now(),
        }))?;
        Ok(line_id)
    }

    /// Delete the product at a 1-based position.
    ///
    /// An out-of-range position is not an error: nothing changes, a notice
    /// is emitted and `Ok(None)` is returned.
    pub fn delete_by_index(&mut self, position: usize) -> DomainResult<Option<Product>> {
        let events = self.execute(&OrderCommand::DeleteAt(DeleteAt {
            position,
            occurred_at: Utc::now(),
        }))?;
        Ok(self.removed_or_notice(events, || format!("position {position}")))
    }

    /// Delete the product added under `line_id`.
    ///
    /// An unknown handle is not an error, same as [`Order::delete_by_index`].
    pub fn delete_by_handle(&mut self, line_id: LineId) -> DomainResult<Option<Product>> {
        let events = self.execute(&OrderCommand::DeleteLine(DeleteLine {
            line_id,
            occurred_at: Utc::now(),
        }))?;
        Ok(self.removed_or_notice(events, || line_id.to_string()))
    }

    /// Pay for the order, freezing it for good.
    pub fn pay_for(&mut self) -> DomainResult<()> {
        self.execute(&OrderCommand::PayFor(PayFor {
            occurred_at: Utc::now(),
        }))?;
        Ok(())
    }

    /// The product a delete removed, or a `LineNotFound` notice when the
    /// delete matched nothing.
    fn removed_or_notice(
        &self,
        events: Vec<OrderEvent>,
        target: impl FnOnce() -> String,
    ) -> Option<Product> {
        let removed = events.into_iter().find_map(|event| match event {
            OrderEvent::ProductRemoved(e) => Some(e.product),
            _ => None,
        });
        if removed.is_none() {
            Notice::LineNotFound {
                target: target(),
                len: self.lines.len(),
            }
            .emit();
        }
        removed
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddProduct.
#[derive(Debug, Clone, PartialEq)]
pub struct AddProduct {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Command: DeleteAt (1-based position).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAt {
    pub position: usize,
    pub occurred_at: DateTime<Utc>,
}

/// Command: DeleteLine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteLine {
    pub line_id: LineId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: PayFor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayFor {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderCommand {
    AddProduct(AddProduct),
    DeleteAt(DeleteAt),
    DeleteLine(DeleteLine),
    PayFor(PayFor),
}

/// Event: ProductAdded.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductAdded {
    pub order_id: OrderId,
    pub line_id: LineId,
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductRemoved.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRemoved {
    pub order_id: OrderId,
    pub line_id: LineId,
    /// 1-based position the line had when it was removed.
    pub position: usize,
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: OrderPaid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPaid {
    pub order_id: OrderId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderEvent {
    ProductAdded(ProductAdded),
    ProductRemoved(ProductRemoved),
    OrderPaid(OrderPaid),
}

impl Event for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::ProductAdded(_) => "sales.order.product_added",
            OrderEvent::ProductRemoved(_) => "sales.order.product_removed",
            OrderEvent::OrderPaid(_) => "sales.order.paid",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::ProductAdded(e) => e.occurred_at,
            OrderEvent::ProductRemoved(e) => e.occurred_at,
            OrderEvent::OrderPaid(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Order {
    type Command = OrderCommand;
    type Event = OrderEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            OrderEvent::ProductAdded(e) => {
                self.total.add(&e.product.props());
                self.lines.push(OrderLine {
                    line_id: e.line_id,
                    product: e.product.clone(),
                });
                self.next_line = self.next_line.max(u64::from(e.line_id.0) + 1);
            }
            OrderEvent::ProductRemoved(e) => {
                if let Some(index) = self.lines.iter().position(|l| l.line_id == e.line_id) {
                    let line = self.lines.remove(index);
                    self.total.subtract(&line.product.props());
                }
            }
            OrderEvent::OrderPaid(_) => {
                self.status = OrderStatus::Closed;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
        tracing::debug!(
            order_id = %self.id,
            event = event.event_type(),
            version = self.version,
            "applied order event"
        );
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        self.ensure_open()?;

        match command {
            OrderCommand::AddProduct(cmd) => self.handle_add(cmd),
            OrderCommand::DeleteAt(cmd) => Ok(self.handle_delete_at(cmd)),
            OrderCommand::DeleteLine(cmd) => Ok(self.handle_delete_line(cmd)),
            OrderCommand::PayFor(cmd) => Ok(self.handle_pay_for(cmd)),
        }
    }
}

impl Order {
    fn ensure_open(&self) -> Result<(), DomainError> {
        match self.status {
            OrderStatus::Open => Ok(()),
            OrderStatus::Closed => Err(DomainError::OrderClosed),
        }
    }

    fn next_line_id(&self) -> Result<LineId, DomainError> {
        u32::try_from(self.next_line)
            .map(LineId)
            .map_err(|_| DomainError::LineIdsExhausted)
    }

    fn handle_add(&self, cmd: &AddProduct) -> Result<Vec<OrderEvent>, DomainError> {
        Ok(vec![OrderEvent::ProductAdded(ProductAdded {
            order_id: self.id,
            line_id: self.next_line_id()?,
            product: cmd.product.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    // A delete that matches nothing yields no events.
    fn handle_delete_at(&self, cmd: &DeleteAt) -> Vec<OrderEvent> {
        self.line(cmd.position)
            .map(|line| vec![self.removal(line, cmd.position, cmd.occurred_at)])
            .unwrap_or_default()
    }

    fn handle_delete_line(&self, cmd: &DeleteLine) -> Vec<OrderEvent> {
        self.position_of(cmd.line_id)
            .map(|position| {
                let line = &self.lines[position - 1];
                vec![self.removal(line, position, cmd.occurred_at)]
            })
            .unwrap_or_default()
    }

    fn removal(&self, line: &OrderLine, position: usize, occurred_at: DateTime<Utc>) -> OrderEvent {
        OrderEvent::ProductRemoved(ProductRemoved {
            order_id: self.id,
            line_id: line.line_id,
            position,
            product: line.product.clone(),
            occurred_at,
        })
    }

    fn handle_pay_for(&self, cmd: &PayFor) -> Vec<OrderEvent> {
        vec![OrderEvent::OrderPaid(OrderPaid {
            order_id: self.id,
            occurred_at: cmd.occurred_at,
        })]
    }
}
