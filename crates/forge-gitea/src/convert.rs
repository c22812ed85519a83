use forge_core::model::{
    Commit, DeployKey, DeployKeyInfo, MergeMethod, Organization, OrganizationRef, PullRequest,
    Repository, RepositoryInfo, RepositoryPermission, RepositoryRef, Visibility,
};

use crate::models;

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub(crate) fn organization(domain: &str, org: &models::Organization) -> Organization {
    Organization {
        organization: OrganizationRef::new(domain, org.login()),
        name: non_empty(&org.full_name),
        description: non_empty(&org.description),
    }
}

/// Expects a validated repository (owner present).
pub(crate) fn repository(
    domain: &str,
    owner_is_org: bool,
    repo: &models::Repository,
) -> Repository {
    let owner = repo
        .owner
        .as_ref()
        .map(|owner| owner.login.clone())
        .unwrap_or_default();
    Repository {
        repository: RepositoryRef {
            domain: domain.to_string(),
            owner,
            name: repo.name.clone(),
            owner_is_org,
        },
        info: RepositoryInfo {
            description: non_empty(&repo.description),
            default_branch: non_empty(&repo.default_branch),
            visibility: Some(if repo.private {
                Visibility::Private
            } else {
                Visibility::Public
            }),
        },
        clone_url: repo.clone_url.clone(),
        ssh_url: repo.ssh_url.clone(),
        html_url: repo.html_url.clone(),
        archived: repo.archived,
    }
}

pub(crate) fn create_repo_option(name: &str, info: &RepositoryInfo) -> models::CreateRepoOption {
    models::CreateRepoOption {
        name: name.to_string(),
        description: info.description.clone().unwrap_or_default(),
        private: info.visibility.unwrap_or_default() == Visibility::Private,
        default_branch: info.default_branch.clone().unwrap_or_default(),
        auto_init: true,
    }
}

pub(crate) fn edit_repo_option(info: &RepositoryInfo) -> models::EditRepoOption {
    models::EditRepoOption {
        description: info.description.clone(),
        private: info
            .visibility
            .map(|visibility| visibility == Visibility::Private),
        default_branch: info.default_branch.clone(),
        ..models::EditRepoOption::default()
    }
}

pub(crate) fn deploy_key(repo: &RepositoryRef, key: &models::DeployKey) -> DeployKey {
    DeployKey {
        id: key.id,
        repository: repo.clone(),
        info: DeployKeyInfo {
            name: key.title.clone(),
            key: key.key.clone(),
            read_only: Some(key.read_only),
        },
    }
}

pub(crate) fn create_key_option(info: &DeployKeyInfo) -> models::CreateKeyOption {
    models::CreateKeyOption {
        title: info.name.clone(),
        key: info.key.clone(),
        read_only: info.read_only.unwrap_or(true),
    }
}

pub(crate) fn permission(mode: models::AccessMode) -> Option<RepositoryPermission> {
    match mode {
        models::AccessMode::None => None,
        models::AccessMode::Read => Some(RepositoryPermission::Pull),
        models::AccessMode::Write => Some(RepositoryPermission::Push),
        models::AccessMode::Admin | models::AccessMode::Owner => Some(RepositoryPermission::Admin),
    }
}

pub(crate) fn access_mode(permission: RepositoryPermission) -> models::AccessMode {
    match permission {
        RepositoryPermission::Pull | RepositoryPermission::Triage => models::AccessMode::Read,
        RepositoryPermission::Push | RepositoryPermission::Maintain => models::AccessMode::Write,
        RepositoryPermission::Admin => models::AccessMode::Admin,
    }
}

pub(crate) fn merge_style(method: MergeMethod) -> models::MergeStyle {
    match method {
        MergeMethod::Merge => models::MergeStyle::Merge,
        MergeMethod::Squash => models::MergeStyle::Squash,
        MergeMethod::Rebase => models::MergeStyle::Rebase,
    }
}

pub(crate) fn pull_request(pr: &models::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        title: pr.title.clone(),
        description: pr.body.clone(),
        web_url: pr.html_url.clone(),
        source_branch: pr
            .head
            .as_ref()
            .map(|head| head.reference.clone())
            .unwrap_or_default(),
        target_branch: pr
            .base
            .as_ref()
            .map(|base| base.reference.clone())
            .unwrap_or_default(),
        merged: pr.merged,
        merge_commit_sha: pr.merge_commit_sha.clone().filter(|sha| !sha.is_empty()),
    }
}

pub(crate) fn commit(commit: &models::Commit) -> Commit {
    let details = commit.commit.as_ref();
    Commit {
        sha: commit.sha.clone(),
        message: details.map(|d| d.message.clone()).unwrap_or_default(),
        author: details
            .and_then(|d| d.author.as_ref())
            .and_then(|author| non_empty(&author.name)),
        url: commit.html_url.clone(),
    }
}
