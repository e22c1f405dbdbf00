use std::path::PathBuf;

use crate::core::export;
use crate::core::model::{FilterCriteria, FilterReport, TIMESTAMP_FORMAT};
use crate::core::ports::{AuditSink, ConfigProvider, OrderStore};
use crate::utils::error::{FilterError, Result};
use crate::utils::validation;

/// Runs one filter-and-export pass: validate, query, export or skip.
///
/// Validation failures abort before any store access and are audited as
/// actions, not errors. A failed export is audited and reported in the
/// [`FilterReport`] but does not fail the run; the queried rows stay
/// available to the caller.
pub struct FilterEngine<S: OrderStore, A: AuditSink, C: ConfigProvider> {
    store: S,
    audit: A,
    config: C,
}

impl<S: OrderStore, A: AuditSink, C: ConfigProvider> FilterEngine<S, A, C> {
    pub fn new(store: S, audit: A, config: C) -> Self {
        Self {
            store,
            audit,
            config,
        }
    }

    pub fn run(&self, district: &str, window_start: &str) -> Result<FilterReport> {
        self.audit.action("order filter requested");

        let district = match validation::validate_district(district) {
            Ok(district) => district,
            Err(err) => {
                self.audit.action("filter skipped: district field is empty");
                return Err(err);
            }
        };
        let window_start = match validation::parse_window_start(window_start) {
            Ok(window_start) => window_start,
            Err(err) => {
                self.audit
                    .action("filter skipped: start time is not a valid timestamp");
                return Err(err);
            }
        };

        let criteria = FilterCriteria::new(district, window_start);
        self.audit.action(&format!(
            "filtering orders in district '{}' between {} and {}",
            criteria.district,
            criteria.window_start.format(TIMESTAMP_FORMAT),
            criteria.window_end().format(TIMESTAMP_FORMAT)
        ));

        let rows = match self.store.fetch_window(&criteria) {
            Ok(rows) => rows,
            Err(err) => {
                let detail = match &err {
                    FilterError::Store(source) => format!("order query failed: {source}"),
                    FilterError::Unexpected { message } => {
                        format!("unexpected failure while filtering: {message}")
                    }
                    other => format!("unexpected failure while filtering: {other}"),
                };
                self.audit.error(&detail);
                return Err(err);
            }
        };

        if rows.is_empty() {
            tracing::info!("no orders matched the filter");
            self.audit.action("filter finished: no matching orders");
            return Ok(FilterReport {
                rows,
                exported_to: None,
                export_notice: None,
            });
        }

        tracing::info!("found {} matching orders", rows.len());
        self.audit
            .action(&format!("filter finished: found {} orders", rows.len()));

        let export_path = PathBuf::from(self.config.export_path());
        match export::write_rows(&rows, &export_path) {
            Ok(()) => {
                self.audit
                    .action(&format!("results written to {}", export_path.display()));
                Ok(FilterReport {
                    rows,
                    exported_to: Some(export_path),
                    export_notice: None,
                })
            }
            Err(err) => {
                self.audit.error(&format!(
                    "failed to write results to {}: {err}",
                    export_path.display()
                ));
                let notice = FilterError::Export(err).user_message();
                Ok(FilterReport {
                    rows,
                    exported_to: None,
                    export_notice: Some(notice),
                })
            }
        }
    }
}
