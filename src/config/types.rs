//! Configuration data structures.

use serde::{Deserialize, Serialize};

/// The admin account the login endpoint checks credentials against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAccount {
    /// The admin identifier submitted at login.
    pub admin_id: String,
    /// The admin password submitted at login.
    pub admin_password: String,
}

/// The fixed roster of people allowed to approve a salary advance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproverRoster {
    /// Approver names, matched exactly against `approvedBy` submissions.
    pub approvers: Vec<String>,
}

/// The assembled service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    admin: AdminAccount,
    approvers: Vec<String>,
}

impl AppConfig {
    /// Creates a new configuration from its loaded parts.
    pub fn new(admin: AdminAccount, approvers: Vec<String>) -> Self {
        Self { admin, approvers }
    }

    /// Returns the admin account.
    pub fn admin(&self) -> &AdminAccount {
        &self.admin
    }

    /// Returns the approver roster.
    pub fn approvers(&self) -> &[String] {
        &self.approvers
    }
}
