pub mod audit;
pub mod engine;
pub mod export;
pub mod model;
pub mod ports;
pub mod store;

pub use crate::core::model::{AuditLevel, FilterCriteria, FilterReport, OrderRow, TIMESTAMP_FORMAT};
pub use crate::core::ports::{AuditSink, ConfigProvider, OrderStore};
pub use crate::utils::error::Result;
