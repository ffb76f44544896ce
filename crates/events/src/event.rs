use chrono::{DateTime, Utc};

/// A domain event.
///
/// Events are immutable facts about something that already happened to an
/// aggregate. A presentation or audit layer can consume them without knowing
/// the aggregate's internals.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "sales.order.paid").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
