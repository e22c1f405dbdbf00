use clap::Parser;
use delivery_filter::utils::logger;
use delivery_filter::{AppConfig, AuditSink, FileAuditLog, FilterEngine, SqliteOrderStore};

fn main() {
    let config = AppConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting delivery-filter");
    if config.verbose {
        tracing::debug!("config: {:?}", config);
    }

    let audit = FileAuditLog::new(&config.log_path);
    audit.action("program started");

    let store = SqliteOrderStore::new(&config.database_path);
    let engine = FilterEngine::new(store, audit, config.clone());

    match engine.run(&config.district, &config.window_start) {
        Ok(report) => {
            if report.rows.is_empty() {
                println!("No orders matched the filter criteria.");
            } else {
                for row in &report.rows {
                    println!("{}", row.to_line());
                }
                if let Some(path) = &report.exported_to {
                    tracing::info!("results written to {}", path.display());
                }
            }
            if let Some(notice) = &report.export_notice {
                eprintln!("{notice}");
            }
        }
        Err(err) => {
            tracing::error!("filter run failed: {err}");
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
    }
}
