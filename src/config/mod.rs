//! Configuration loading and management for the Salary Manager service.
//!
//! This module provides functionality to load the service configuration
//! from YAML files: the admin account the login endpoint checks against
//! and the fixed roster of advance approvers.
//!
//! # Example
//!
//! ```no_run
//! use salary_manager::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/salary").unwrap();
//! println!("{} approvers configured", config.approvers().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AdminAccount, AppConfig, ApproverRoster};
