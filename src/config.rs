//! Harness profiles
//!
//! Property and model tests run under one of two profiles, chosen by the
//! `CI_ROLE` environment variable:
//!
//! | `CI_ROLE`       | cases | max model steps | verbose |
//! |-----------------|-------|-----------------|---------|
//! | unset / `local` | 50    | 50              | yes     |
//! | `ci`            | 500   | 100             | no      |
//!
//! ```rust
//! use rust_min_heap::config::HarnessProfile;
//!
//! let profile: HarnessProfile = "ci".parse().unwrap();
//! assert_eq!(profile.proptest_config().cases, 500);
//! ```

use std::env;
use std::str::FromStr;

use proptest::test_runner::Config as ProptestConfig;
use thiserror::Error;
use tracing::warn;

/// Environment variable selecting the profile
pub const PROFILE_ENV: &str = "CI_ROLE";

/// Errors raised while selecting a profile
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The role name matches no known profile
    #[error("unknown harness profile {0:?}, expected \"local\" or \"ci\"")]
    UnknownProfile(String),
}

/// How hard the property and model tests work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HarnessProfile {
    /// Developer machine: few cases, verbose output
    #[default]
    Local,
    /// Continuous integration: many cases, quiet
    Ci,
}

impl HarnessProfile {
    /// Reads the profile from `CI_ROLE`; an unset variable selects `local`
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(PROFILE_ENV) {
            Ok(role) => role.parse(),
            Err(_) => Ok(Self::Local),
        }
    }

    /// Like [`from_env`](Self::from_env), but falls back to `local` with a
    /// warning when the role name is not recognized
    pub fn from_env_or_local() -> Self {
        Self::from_env().unwrap_or_else(|err| {
            warn!(%err, "falling back to the local harness profile");
            Self::Local
        })
    }

    /// Number of generated cases per property
    pub fn cases(self) -> u32 {
        match self {
            Self::Local => 50,
            Self::Ci => 500,
        }
    }

    /// Upper bound on the number of operations in one stateful run
    pub fn max_steps(self) -> usize {
        match self {
            Self::Local => 50,
            Self::Ci => 100,
        }
    }

    /// Whether proptest should report each case
    pub fn verbose(self) -> bool {
        matches!(self, Self::Local)
    }

    /// The proptest configuration for this profile
    pub fn proptest_config(self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases(),
            verbose: u32::from(self.verbose()),
            ..ProptestConfig::default()
        }
    }
}

impl FromStr for HarnessProfile {
    type Err = ConfigError;

    fn from_str(role: &str) -> Result<Self, Self::Err> {
        match role.trim().to_ascii_lowercase().as_str() {
            "" | "local" => Ok(Self::Local),
            "ci" => Ok(Self::Ci),
            _ => Err(ConfigError::UnknownProfile(role.to_string())),
        }
    }
}
