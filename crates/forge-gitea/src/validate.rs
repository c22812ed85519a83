use forge_core::{ProviderError, Result};

use crate::models::{DeployKey, Organization, Repository};

fn check(object: &'static str, missing: Vec<&'static str>) -> Result<()> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ProviderError::invalid_server_data(object, missing))
    }
}

fn blank(value: &str) -> bool {
    value.is_empty()
}

pub fn validate_organization(org: &Organization) -> Result<()> {
    let mut missing = Vec::new();
    if blank(org.login()) {
        missing.push("username");
    }
    check("organization", missing)
}

pub fn validate_repository(repo: &Repository) -> Result<()> {
    let mut missing = Vec::new();
    if blank(&repo.name) {
        missing.push("name");
    }
    if blank(&repo.full_name) {
        missing.push("full_name");
    }
    match &repo.owner {
        Some(owner) if !blank(&owner.login) => {}
        _ => missing.push("owner.login"),
    }
    check("repository", missing)
}

pub fn validate_deploy_key(key: &DeployKey) -> Result<()> {
    let mut missing = Vec::new();
    if blank(&key.key) {
        missing.push("key");
    }
    if blank(&key.title) {
        missing.push("title");
    }
    check("deploy key", missing)
}

/// Validates every object; the first invalid one fails the whole list.
pub fn validate_all<T>(items: Vec<T>, validate: impl Fn(&T) -> Result<()>) -> Result<Vec<T>> {
    for item in &items {
        validate(item)?;
    }
    Ok(items)
}
