//! `Nuctasks`: terminal single-page task list.

pub mod app;
pub mod config;
pub mod ui;
