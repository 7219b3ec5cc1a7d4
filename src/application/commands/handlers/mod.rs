//! Command Handlers

mod summary_handlers;

pub use summary_handlers::GenerateSummaryHandler;
