use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::core::ConfigProvider;

/// Built once at startup from the command line and passed by reference;
/// nothing in the crate reads ambient or static state.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "delivery-filter")]
#[command(about = "Filters delivery orders by district and a 30-minute time window")]
pub struct AppConfig {
    /// City district to filter on.
    pub district: String,

    /// Window start in `yyyy-MM-dd HH:mm:ss` format.
    pub window_start: String,

    #[arg(long, default_value = "DeliveryOrdersDB.db")]
    pub database_path: String,

    #[arg(long, default_value = "_deliveryOrder.txt")]
    pub export_path: String,

    #[arg(long, default_value = "_deliveryLog.txt")]
    pub log_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for AppConfig {
    fn database_path(&self) -> &str {
        &self.database_path
    }

    fn export_path(&self) -> &str {
        &self.export_path
    }

    fn audit_log_path(&self) -> &str {
        &self.log_path
    }
}
