//! artgrid - browse a paginated art collection in the terminal and select
//! rows across pages.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod input;
pub mod models;
pub mod pagination;
pub mod selection;
pub mod source;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
