pub mod app;
pub mod config;
pub mod counter;
pub mod error;
pub mod logging;
pub mod theme;
pub mod ui;
