//! Casa Server - REST backend for the community administration screens
//!
//! # Module layout
//!
//! ```text
//! casa-server/src/
//! ├── core/          # config, state, server, background tasks
//! ├── api/           # HTTP routes and handlers, one module per resource
//! ├── db/            # in-memory tables and repositories
//! ├── therapies.rs   # daily ticket book reset
//! └── utils/         # errors, logging, time, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod therapies;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Start logging according to `config`
pub fn setup_environment(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
   ______
  / ____/___ __________ _
 / /   / __ `/ ___/ __ `/
/ /___/ /_/ (__  ) /_/ /
\____/\__,_/____/\__,_/
    "#
    );
}
