//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::{AdminAccount, AppConfig, ApproverRoster};

/// Loads and provides access to the service configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// answers the credential and approver-roster questions the handlers ask.
///
/// # Directory Structure
///
/// ```text
/// config/salary/
/// ├── admin.yaml      # Admin account
/// └── approvers.yaml  # Advance approver roster
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_manager::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/salary").unwrap();
/// assert!(loader.is_approver("Mahendra Gulechha"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/salary")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let admin_path = path.join("admin.yaml");
        let admin = Self::load_yaml::<AdminAccount>(&admin_path)?;

        let approvers_path = path.join("approvers.yaml");
        let roster = Self::load_yaml::<ApproverRoster>(&approvers_path)?;

        Ok(Self {
            config: AppConfig::new(admin, roster.approvers),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the configured approver roster.
    pub fn approvers(&self) -> &[String] {
        self.config.approvers()
    }

    /// Returns whether a name belongs to the approver roster.
    pub fn is_approver(&self, name: &str) -> bool {
        self.config.approvers().iter().any(|a| a == name)
    }

    /// Checks submitted credentials against the admin account.
    ///
    /// Returns the canonical admin id on success, or
    /// [`PayrollError::InvalidCredentials`] on any mismatch.
    pub fn verify_admin(&self, admin_id: &str, admin_password: &str) -> PayrollResult<String> {
        let admin = self.config.admin();
        if admin.admin_id == admin_id && admin.admin_password == admin_password {
            Ok(admin.admin_id.clone())
        } else {
            Err(PayrollError::InvalidCredentials)
        }
    }
}
