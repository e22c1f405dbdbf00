pub mod config;
pub mod core;
pub mod utils;

pub use crate::core::audit::FileAuditLog;
pub use crate::core::engine::FilterEngine;
pub use crate::core::store::SqliteOrderStore;
pub use crate::core::{
    AuditSink, ConfigProvider, FilterCriteria, FilterReport, OrderRow, OrderStore,
};
pub use config::AppConfig;
pub use utils::error::{FilterError, Result};
