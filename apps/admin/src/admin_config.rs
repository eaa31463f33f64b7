use std::env;

use mla_connect_application::RoleServiceConfig;
use mla_connect_core::AppError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub allow_duplicate_role_names: bool,
    pub seed_sample_roles: bool,
    pub pretty_json: bool,
}

impl AdminConfig {
    pub fn load() -> Result<Self, AppError> {
        Ok(Self {
            allow_duplicate_role_names: flag_env("ROLE_ALLOW_DUPLICATE_NAMES", true)?,
            seed_sample_roles: flag_env("ADMIN_SEED_SAMPLE_ROLES", true)?,
            pretty_json: flag_env("ADMIN_PRETTY_JSON", true)?,
        })
    }

    pub fn role_service_config(&self) -> RoleServiceConfig {
        RoleServiceConfig {
            allow_duplicate_names: self.allow_duplicate_role_names,
        }
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn flag_env(name: &str, default: bool) -> Result<bool, AppError> {
    match env::var(name) {
        Ok(value) => parse_flag(name, value.as_str()),
        Err(_) => Ok(default),
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, AppError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Ok(false)
    } else {
        Err(AppError::Validation(format!(
            "{name} must be 'true' or 'false', got '{value}'"
        )))
    }
}
