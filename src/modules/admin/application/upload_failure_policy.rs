use std::collections::HashMap;
use std::str::FromStr;

use crate::modules::admin::application::admin_form::AdminEntity;

/// What a save does when its attachment could not be uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFailurePolicy {
    /// Reject the save with a validation error on the upload field.
    Block,
    /// Persist without touching the URL field and report a warning.
    WarnAndContinue,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid upload failure policy '{value}' for {key} (expected 'block' or 'warn')")]
pub struct UploadFailurePolicyParseError {
    pub key: String,
    pub value: String,
}

impl FromStr for UploadFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" => Ok(UploadFailurePolicy::Block),
            "warn" | "warn_and_continue" => Ok(UploadFailurePolicy::WarnAndContinue),
            other => Err(other.to_string()),
        }
    }
}

/// Per-entity upload failure policy, overridable through
/// `UPLOAD_FAILURE_POLICY_<ENTITY>` (`block` | `warn`).
///
/// Defaults: the profile photo blocks the save, every other attachment warns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFailurePolicies {
    overrides: HashMap<AdminEntity, UploadFailurePolicy>,
}

impl UploadFailurePolicies {
    pub fn default_for(entity: AdminEntity) -> UploadFailurePolicy {
        match entity {
            AdminEntity::Profile => UploadFailurePolicy::Block,
            _ => UploadFailurePolicy::WarnAndContinue,
        }
    }

    pub fn from_env() -> Result<Self, UploadFailurePolicyParseError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, UploadFailurePolicyParseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut policies = Self::default();

        for entity in AdminEntity::ALL {
            let key = format!("UPLOAD_FAILURE_POLICY_{}", entity.env_key());
            let Some(raw) = lookup(&key).filter(|v| !v.trim().is_empty()) else {
                continue;
            };

            let policy = raw
                .parse::<UploadFailurePolicy>()
                .map_err(|value| UploadFailurePolicyParseError {
                    key: key.clone(),
                    value,
                })?;

            policies.overrides.insert(entity, policy);
        }

        Ok(policies)
    }

    pub fn with(mut self, entity: AdminEntity, policy: UploadFailurePolicy) -> Self {
        self.overrides.insert(entity, policy);
        self
    }

    pub fn for_entity(&self, entity: AdminEntity) -> UploadFailurePolicy {
        self.overrides
            .get(&entity)
            .copied()
            .unwrap_or_else(|| Self::default_for(entity))
    }
}
