use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProviderError;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    Gitea,
}

impl ProviderKind {
    pub fn as_prefix(&self) -> &'static str {
        match self {
            ProviderKind::Gitea => "gitea",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_prefix())
    }
}

/// Points at an organization on a given provider domain.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct OrganizationRef {
    pub domain: String,
    pub organization: String,
}

impl OrganizationRef {
    pub fn new(domain: impl Into<String>, organization: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            organization: organization.into(),
        }
    }
}

impl fmt::Display for OrganizationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.domain, self.organization)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct UserRef {
    pub domain: String,
    pub login: String,
}

impl UserRef {
    pub fn new(domain: impl Into<String>, login: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            login: login.into(),
        }
    }
}

/// A repository identified by its owner (user or organization) and name.
///
/// `owner_is_org` decides which creation endpoint is used; lookups only need
/// the owner login.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RepositoryRef {
    pub domain: String,
    pub owner: String,
    pub name: String,
    #[serde(default)]
    pub owner_is_org: bool,
}

impl RepositoryRef {
    pub fn org(org: &OrganizationRef, name: impl Into<String>) -> Self {
        Self {
            domain: org.domain.clone(),
            owner: org.organization.clone(),
            name: name.into(),
            owner_is_org: true,
        }
    }

    pub fn user(user: &UserRef, name: impl Into<String>) -> Self {
        Self {
            domain: user.domain.clone(),
            owner: user.login.clone(),
            name: name.into(),
            owner_is_org: false,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Parses `owner/name`. The owner is treated as a user unless flagged otherwise.
    pub fn parse(domain: &str, value: &str) -> crate::Result<Self> {
        let (owner, name) = value
            .split_once('/')
            .filter(|(owner, name)| !owner.is_empty() && !name.is_empty() && !name.contains('/'))
            .ok_or_else(|| {
                ProviderError::InvalidArgument(format!("expected owner/name, got {value:?}"))
            })?;
        Ok(Self {
            domain: domain.to_string(),
            owner: owner.to_string(),
            name: name.to_string(),
            owner_is_org: false,
        })
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.domain, self.owner, self.name)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub organization: OrganizationRef,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub visibility: Option<Visibility>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub repository: RepositoryRef,
    pub info: RepositoryInfo,
    pub clone_url: String,
    pub ssh_url: String,
    pub html_url: String,
    #[serde(default)]
    pub archived: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DeployKeyInfo {
    pub name: String,
    pub key: String,
    #[serde(default)]
    pub read_only: Option<bool>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DeployKey {
    pub id: i64,
    pub repository: RepositoryRef,
    pub info: DeployKeyInfo,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryPermission {
    Pull,
    Triage,
    Push,
    Maintain,
    Admin,
}

impl RepositoryPermission {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepositoryPermission::Pull => "pull",
            RepositoryPermission::Triage => "triage",
            RepositoryPermission::Push => "push",
            RepositoryPermission::Maintain => "maintain",
            RepositoryPermission::Admin => "admin",
        }
    }
}

impl fmt::Display for RepositoryPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepositoryPermission {
    type Err = ProviderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pull" | "read" => Ok(RepositoryPermission::Pull),
            "triage" => Ok(RepositoryPermission::Triage),
            "push" | "write" => Ok(RepositoryPermission::Push),
            "maintain" => Ok(RepositoryPermission::Maintain),
            "admin" | "owner" => Ok(RepositoryPermission::Admin),
            other => Err(ProviderError::InvalidArgument(format!(
                "unknown repository permission: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub organization: OrganizationRef,
    pub name: String,
    pub members: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamAccess {
    pub repository: RepositoryRef,
    pub name: String,
    pub permission: Option<RepositoryPermission>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    #[default]
    Merge,
    Squash,
    Rebase,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: i64,
    pub title: String,
    pub description: String,
    pub web_url: String,
    pub source_branch: String,
    pub target_branch: String,
    pub merged: bool,
    pub merge_commit_sha: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub message: String,
    pub author: Option<String>,
    pub url: String,
}
