use crate::core::model::{FilterCriteria, OrderRow};
use crate::utils::error::Result;

/// Source of order rows. The shipped implementation is
/// [`crate::core::store::SqliteOrderStore`]; tests substitute in-memory
/// stores.
pub trait OrderStore: Send + Sync {
    /// Returns every order in `criteria.district` whose delivery timestamp
    /// lies inside the inclusive window, in the store's return order.
    fn fetch_window(&self, criteria: &FilterCriteria) -> Result<Vec<OrderRow>>;
}

/// Append-only trail of actions and errors. Implementations must not
/// propagate their own write failures.
pub trait AuditSink: Send + Sync {
    fn action(&self, message: &str);
    fn error(&self, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn database_path(&self) -> &str;
    fn export_path(&self) -> &str;
    fn audit_log_path(&self) -> &str;
}
