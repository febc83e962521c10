//! # Canary Health Indicator
//!
//! Forces the liveness endpoint to report DOWN while a designated environment
//! variable is present. Deployment pipelines use this to fail health checks on
//! purpose and exercise their automatic rollback.
//!
//! To activate the failure state, set `TRIGGER_HEALTH_FAILURE` (any value,
//! including empty) in the target environment, e.g. in a Kubernetes manifest
//! or Helm values file.

use std::env;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::Health;
use crate::utils::constant::HEALTH_FAILURE_ENV_VAR;

type VarLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

#[derive(Clone)]
pub struct CanaryHealthIndicator {
    failure_env_var: String,
    lookup: VarLookup,
}

impl fmt::Debug for CanaryHealthIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanaryHealthIndicator")
            .field("failure_env_var", &self.failure_env_var)
            .finish_non_exhaustive()
    }
}

impl Default for CanaryHealthIndicator {
    fn default() -> Self {
        Self::new(HEALTH_FAILURE_ENV_VAR)
    }
}

impl CanaryHealthIndicator {
    /// Creates an indicator that watches `failure_env_var` in the process environment.
    pub fn new(failure_env_var: impl Into<String>) -> Self {
        Self::with_lookup(failure_env_var, |name| {
            env::var_os(name).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// Creates an indicator that resolves `failure_env_var` through `lookup`
    /// instead of the process environment.
    pub fn with_lookup(
        failure_env_var: impl Into<String>,
        lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            failure_env_var: failure_env_var.into(),
            lookup: Arc::new(lookup),
        }
    }

    pub fn failure_env_var(&self) -> &str {
        &self.failure_env_var
    }

    /// Reports DOWN if the failure variable is set, UP otherwise.
    ///
    /// The variable is resolved on every call, so the trigger takes effect
    /// without restarting the process.
    pub fn health(&self) -> Health {
        if (self.lookup)(&self.failure_env_var).is_some() {
            warn!(
                failure_env_var = %self.failure_env_var,
                "Health failure trigger is set, reporting DOWN"
            );
            return Health::down().with_detail(
                "reason",
                format!(
                    "Manual failure triggered by env variable {}",
                    self.failure_env_var
                ),
            );
        }

        debug!("Canary health is UP");
        Health::up()
    }
}
