pub mod app;
pub mod app_lock;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod detail;
pub mod error;
pub mod fixtures;
pub mod lists;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod route;
pub mod services;
pub mod session;
pub mod settings;
pub mod shutdown;
pub mod store;
