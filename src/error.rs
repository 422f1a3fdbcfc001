use thiserror::Error;
use tracing::{Span, error, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Connection error: {0}")]
    Connection(sqlx::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn log_and_record(&self, ctx: &str) {
        let current_span = Span::current();

        let message = self.to_string();
        let error_kind = match self {
            AppError::Connection(err) => {
                error!(error = %message, context = %ctx, db_error = %err, "Connection error");
                "connection_error"
            }
            AppError::Database(err) => {
                error!(error = %message, context = %ctx, db_error = %err, "Database error");
                "database_error"
            }
            AppError::NotFound(msg) => {
                warn!(message = %msg, context = %ctx, "Not found error");
                "not_found_error"
            }
            AppError::Io(err) => {
                error!(error = %err, context = %ctx, "Console write error");
                "io_error"
            }
        };

        if !current_span.is_none() {
            current_span.record("error", tracing::field::display(true));
            current_span.record("error.type", tracing::field::display(error_kind));
        }
    }

    /// True for failures the driver reports and moves past.
    pub fn is_statement_failure(&self) -> bool {
        matches!(self, AppError::Database(_) | AppError::Io(_))
    }
}
