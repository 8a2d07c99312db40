// Quote overlay service library

pub mod config;
pub mod constants;
pub mod error;
pub mod fonts;
pub mod logging;
pub mod overlay;
pub mod server;
