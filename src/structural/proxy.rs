// Proxy: stands in for the real internet connection, opens it only when a
// request gets through, and refuses restricted sites to underage users.

use std::cell::OnceCell;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::error::{PatternError, Result};

/// Who may visit what. Loaded from the `[access]` config section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccessPolicy {
    pub minimum_age: u32,
    pub restricted_sites: Vec<String>,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            minimum_age: 18,
            restricted_sites: vec!["adult-site.com".to_string()],
        }
    }
}

impl AccessPolicy {
    /// Matches ignore ASCII case and surrounding whitespace on both sides.
    pub fn is_restricted(&self, site: &str) -> bool {
        let site = site.trim();
        self.restricted_sites
            .iter()
            .any(|entry| entry.trim().eq_ignore_ascii_case(site))
    }

    pub fn check(&self, user_age: u32, site: &str) -> Result<()> {
        if user_age < self.minimum_age && self.is_restricted(site) {
            return Err(PatternError::AccessDenied {
                site: site.to_string(),
                reason: format!("user is under {}", self.minimum_age),
            });
        }
        Ok(())
    }
}

pub trait Internet {
    fn browse(&self, site: &str) -> Result<String>;
}

#[derive(Debug)]
pub struct RealInternet {
    _private: (),
}

impl RealInternet {
    pub fn connect() -> Self {
        debug!("opening real internet connection");
        Self { _private: () }
    }
}

impl Internet for RealInternet {
    fn browse(&self, site: &str) -> Result<String> {
        Ok(format!("Browsing {site}"))
    }
}

#[derive(Debug)]
pub struct InternetProxy {
    user_age: u32,
    policy: AccessPolicy,
    real: OnceCell<RealInternet>,
}

impl InternetProxy {
    pub fn new(user_age: u32, policy: AccessPolicy) -> Self {
        Self {
            user_age,
            policy,
            real: OnceCell::new(),
        }
    }

    /// Proxy governed by the process-wide [`CatalogConfig`].
    pub fn from_config(user_age: u32) -> Self {
        Self::new(user_age, CatalogConfig::global().access.clone())
    }

    pub fn user_age(&self) -> u32 {
        self.user_age
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Whether a request has been let through yet.
    pub fn is_connected(&self) -> bool {
        self.real.get().is_some()
    }
}

impl Internet for InternetProxy {
    fn browse(&self, site: &str) -> Result<String> {
        if let Err(err) = self.policy.check(self.user_age, site) {
            warn!(site, user_age = self.user_age, "access denied");
            return Err(err);
        }
        self.real.get_or_init(RealInternet::connect).browse(site)
    }
}
