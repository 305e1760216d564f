// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report generation module

pub mod formatter;
pub mod generator;
pub mod output;

pub use formatter::ReportFormatter;
pub use generator::{
    generate_audit, generate_listing, generate_resolve_report, generate_switch_report, AuditReport,
    AuditRow, ListingReport, ListingRow, ResolveOutcome, ResolveReport, SwitchReport,
};
pub use output::OutputFormat;
