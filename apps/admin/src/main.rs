//! MLA Connect roles-and-permissions administration console.

#![forbid(unsafe_code)]

mod admin_config;
mod dev_seed;
mod dto;

use std::env;
use std::io::Read;
use std::str::FromStr;
use std::sync::Arc;

use mla_connect_application::RoleService;
use mla_connect_core::{AppError, AppResult, RoleId};
use mla_connect_domain::PermissionCatalog;
use mla_connect_infrastructure::{InMemoryRoleRepository, TracingRoleNotifier};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::admin_config::{AdminConfig, init_tracing};
use crate::dto::{
    CreateRoleRequest, PermissionModuleResponse, RoleResponse, RolesPageResponse,
    UpdateRoleRequest,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminView {
    Page,
    Catalog,
    Roles,
    Create,
    Edit,
}

impl AdminView {
    fn from_arg(value: Option<&str>) -> AppResult<Self> {
        match value {
            None | Some("page") => Ok(Self::Page),
            Some("catalog") => Ok(Self::Catalog),
            Some("roles") => Ok(Self::Roles),
            Some("create") => Ok(Self::Create),
            Some("edit") => Ok(Self::Edit),
            Some(other) => Err(AppError::Validation(format!(
                "unknown view '{other}', expected one of: page, catalog, roles, create, edit"
            ))),
        }
    }
}

fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AdminConfig::load()?;
    let view = AdminView::from_arg(env::args().nth(1).as_deref())?;
    let catalog = Arc::new(PermissionCatalog::standard());
    let mut role_service = build_role_service(catalog.clone(), &config)?;

    info!(
        view = ?view,
        allow_duplicate_role_names = config.allow_duplicate_role_names,
        seed_sample_roles = config.seed_sample_roles,
        permissions = catalog.list_all().len(),
        "mla-connect-admin started"
    );

    let output = match view {
        AdminView::Catalog => to_json(
            &PermissionModuleResponse::from_catalog(&catalog),
            config.pretty_json,
        )?,
        AdminView::Roles => {
            let roles: Vec<RoleResponse> = role_service
                .list_roles()?
                .iter()
                .map(|role| RoleResponse::from_role(role, &catalog))
                .collect();
            to_json(&roles, config.pretty_json)?
        }
        AdminView::Create => {
            let request: CreateRoleRequest = read_request("create role")?;
            role_service.create_role(request.into())?;
            to_json(&roles_page(&role_service)?, config.pretty_json)?
        }
        AdminView::Edit => {
            let role_id = parse_role_id(env::args().nth(2).as_deref())?;
            let request: UpdateRoleRequest = read_request("update role")?;
            role_service.update_role(role_id, request.into())?;
            to_json(&roles_page(&role_service)?, config.pretty_json)?
        }
        AdminView::Page => to_json(&roles_page(&role_service)?, config.pretty_json)?,
    };

    println!("{output}");
    Ok(())
}

fn build_role_service(
    catalog: Arc<PermissionCatalog>,
    config: &AdminConfig,
) -> AppResult<RoleService> {
    let repository = if config.seed_sample_roles {
        let roles = dev_seed::sample_roles(&catalog)?;
        info!(roles = roles.len(), "seeded sample roles");
        InMemoryRoleRepository::with_roles(roles)?
    } else {
        InMemoryRoleRepository::new()
    };

    Ok(RoleService::new(
        catalog,
        Box::new(repository),
        Arc::new(TracingRoleNotifier::new()),
        config.role_service_config(),
    ))
}

fn roles_page(role_service: &RoleService) -> AppResult<RolesPageResponse> {
    let roles = role_service.list_roles()?;
    let summary = role_service.role_summary()?;
    Ok(RolesPageResponse::build(
        role_service.catalog(),
        &roles,
        summary,
    ))
}

fn parse_role_id(value: Option<&str>) -> AppResult<RoleId> {
    let value = value.ok_or_else(|| {
        AppError::Validation("edit requires a role id as second argument".to_owned())
    })?;
    RoleId::from_str(value)
}

fn read_request<T: DeserializeOwned>(label: &str) -> AppResult<T> {
    let mut payload = String::new();
    std::io::stdin()
        .read_to_string(&mut payload)
        .map_err(|error| AppError::Internal(format!("failed to read stdin: {error}")))?;

    serde_json::from_str(payload.as_str())
        .map_err(|error| AppError::Validation(format!("invalid {label} payload: {error}")))
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    encoded.map_err(|error| AppError::Internal(format!("failed to encode output: {error}")))
}
