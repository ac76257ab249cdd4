//! Function configuration.
//!
//! The configuration is read once from the process environment at startup
//! and passed into the handler as an immutable value. Validation is deferred
//! to each invocation so a misconfigured deployment still answers every
//! request with a JSON failure instead of refusing to start.

mod error;

pub use error::ConfigError;

use std::fmt;

/// Environment variable holding the target repository owner.
pub const REPO_OWNER_VAR: &str = "REPO_OWNER";
/// Environment variable holding the target repository name.
pub const REPO_NAME_VAR: &str = "REPO_NAME";
/// Environment variable holding the GitHub access token.
pub const GH_TOKEN_VAR: &str = "GH_TOKEN";
/// Environment variable overriding the label applied to created issues.
pub const DEFAULT_LABEL_VAR: &str = "DEFAULT_LABEL";
/// Environment variable overriding the GitHub API base URL.
pub const API_URL_VAR: &str = "GITHUB_API_URL";

/// Label applied to created issues when [`DEFAULT_LABEL_VAR`] is unset.
pub const DEFAULT_LABEL: &str = "begehung";
/// Public GitHub REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Process-wide settings for the submission function.
#[derive(Clone, PartialEq, Eq)]
pub struct FunctionConfig {
    /// Owner login of the target repository.
    repo_owner: String,
    /// Name of the target repository.
    repo_name: String,
    /// Bearer token for the GitHub API.
    token: String,
    /// Label attached to every created issue.
    default_label: String,
    /// Base URL of the GitHub REST API, without trailing slash.
    api_base_url: String,
}

impl FunctionConfig {
    /// Creates a configuration for the given repository and token.
    pub fn new(
        repo_owner: impl Into<String>,
        repo_name: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            repo_owner: repo_owner.into(),
            repo_name: repo_name.into(),
            token: token.into(),
            default_label: DEFAULT_LABEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// Unset variables become empty values; see [`FunctionConfig::validate`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(
            lookup(REPO_OWNER_VAR).unwrap_or_default(),
            lookup(REPO_NAME_VAR).unwrap_or_default(),
            lookup(GH_TOKEN_VAR).unwrap_or_default(),
        );
        if let Some(label) = lookup(DEFAULT_LABEL_VAR).filter(|v| !v.is_empty()) {
            config = config.with_default_label(label);
        }
        if let Some(url) = lookup(API_URL_VAR).filter(|v| !v.is_empty()) {
            config = config.with_api_base_url(url);
        }
        config
    }

    /// Sets the label attached to created issues.
    #[must_use]
    pub fn with_default_label(mut self, label: impl Into<String>) -> Self {
        self.default_label = label.into();
        self
    }

    /// Sets the GitHub API base URL.
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Checks that owner, repository name and token are all present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Incomplete`] naming every missing variable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing: Vec<&'static str> = [
            (GH_TOKEN_VAR, &self.token),
            (REPO_OWNER_VAR, &self.repo_owner),
            (REPO_NAME_VAR, &self.repo_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Incomplete { missing })
        }
    }

    /// Returns the repository owner.
    pub fn repo_owner(&self) -> &str {
        &self.repo_owner
    }

    /// Returns the repository name.
    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    /// Returns the GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the label attached to created issues.
    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    /// Returns the API base URL.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Returns the issue-creation endpoint for the configured repository.
    pub fn issues_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.api_base_url, self.repo_owner, self.repo_name
        )
    }
}

impl fmt::Debug for FunctionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionConfig")
            .field("repo_owner", &self.repo_owner)
            .field("repo_name", &self.repo_name)
            .field("token", &if self.token.is_empty() { "" } else { "***" })
            .field("default_label", &self.default_label)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}
