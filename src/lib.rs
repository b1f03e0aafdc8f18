//! # Hourbank - Overtime hour bank tracker
//!
//! A command-line utility for keeping a "banco de horas": record the days a
//! shift ran long, split the extra minutes into day and night buckets, and
//! share the accumulated totals.
//!
//! ## Features
//!
//! - **Overtime Split**: Derives day and night (22:00-05:00) overtime from
//!   the scheduled and actual end of a shift, with midnight rollover
//! - **Holiday Entries**: Attributes a whole day's split to separate
//!   holiday buckets
//! - **Local Bank**: Stores every entry in a single JSON collection on disk
//! - **Summaries**: Running totals per bucket plus a holiday count
//! - **Sharing**: WhatsApp and mail deep links carrying a pre-formatted
//!   summary
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hourbank::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
