//! Higher-level wrapper around [`RestClient`].
//!
//! List methods paginate, every returned object is validated, and HTTP
//! failures go through [`handle_http_error`]. The [`GiteaClient`] trait exists
//! so the provider clients can be exercised against a fake.

use forge_core::config::ProviderConfig;
use forge_core::{ProviderError, Result};
use tracing::{debug, info};

use crate::api::{ListCommitOptions, ListOptions, RestClient};
use crate::errors::handle_http_error;
use crate::models::{
    AccessMode, Commit, CreateKeyOption, CreatePullRequestOption, CreateRepoOption, DeployKey,
    EditRepoOption, MergePullRequestOption, Organization, PullRequest, Repository, Team, User,
};
use crate::paging::{PageLimit, collect_pages};
use crate::validate::{
    validate_all, validate_deploy_key, validate_organization, validate_repository,
};

pub trait GiteaClient: Send + Sync {
    /// `GET /orgs/{org}`
    fn get_org(&self, org: &str) -> Result<Organization>;
    /// `GET /user/orgs`
    fn list_orgs(&self) -> Result<Vec<Organization>>;

    /// `GET /orgs/{org}/teams`, then `GET /teams/{id}/members` for the team
    /// named `team`.
    fn list_org_team_members(&self, org: &str, team: &str) -> Result<Vec<User>>;
    /// `GET /teams/{id}/members`
    fn list_team_members(&self, team_id: i64) -> Result<Vec<User>>;
    /// `GET /orgs/{org}/teams`
    fn list_org_teams(&self, org: &str) -> Result<Vec<Team>>;

    /// `GET /repos/{owner}/{repo}`
    fn get_repo(&self, owner: &str, repo: &str) -> Result<Repository>;
    /// `GET /orgs/{org}/repos`
    fn list_org_repos(&self, org: &str) -> Result<Vec<Repository>>;
    /// `GET /users/{user}/repos`
    fn list_user_repos(&self, user: &str) -> Result<Vec<Repository>>;
    /// `POST /user/repos` when `org` is empty, `POST /orgs/{org}/repos` otherwise.
    fn create_repo(&self, org: &str, req: &CreateRepoOption) -> Result<Repository>;
    /// `PATCH /repos/{owner}/{repo}`
    fn update_repo(&self, owner: &str, repo: &str, req: &EditRepoOption) -> Result<Repository>;
    /// `DELETE /repos/{owner}/{repo}`. Refused unless destructive actions are allowed.
    fn delete_repo(&self, owner: &str, repo: &str) -> Result<()>;

    /// `GET /repos/{owner}/{repo}/keys`
    fn list_keys(&self, owner: &str, repo: &str) -> Result<Vec<DeployKey>>;
    /// `POST /repos/{owner}/{repo}/keys`
    fn create_key(&self, owner: &str, repo: &str, req: &CreateKeyOption) -> Result<DeployKey>;
    /// `DELETE /repos/{owner}/{repo}/keys/{id}`
    fn delete_key(&self, owner: &str, repo: &str, id: i64) -> Result<()>;

    /// `GET /repos/{owner}/{repo}/commits` for a single page.
    fn list_commits_page(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<Commit>>;

    /// `GET /repos/{owner}/{repo}/teams/{team}`
    fn get_team_permissions(&self, org: &str, repo: &str, team: &str) -> Result<AccessMode>;
    /// `GET /repos/{owner}/{repo}/teams`
    fn get_repo_teams(&self, org: &str, repo: &str) -> Result<Vec<Team>>;
    /// `PUT /repos/{owner}/{repo}/teams/{team}`
    fn add_team(&self, org: &str, repo: &str, team: &str) -> Result<()>;
    /// `DELETE /repos/{owner}/{repo}/teams/{team}`
    fn remove_team(&self, org: &str, repo: &str, team: &str) -> Result<()>;

    /// `GET /repos/{owner}/{repo}/pulls`, first page only.
    fn list_pull_requests(&self, owner: &str, repo: &str) -> Result<Vec<PullRequest>>;
    /// `POST /repos/{owner}/{repo}/pulls`
    fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        req: &CreatePullRequestOption,
    ) -> Result<PullRequest>;
    /// `GET /repos/{owner}/{repo}/pulls/{number}`
    fn get_pull_request(&self, owner: &str, repo: &str, number: i64) -> Result<PullRequest>;
    /// `POST /repos/{owner}/{repo}/pulls/{number}/merge`
    fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: i64,
        req: &MergePullRequestOption,
    ) -> Result<()>;
}

pub struct GiteaClientImpl {
    api: RestClient,
    destructive_actions: bool,
    page_size: u32,
    page_limit: PageLimit,
}

impl GiteaClientImpl {
    pub fn new(api: RestClient, config: &ProviderConfig) -> Self {
        Self {
            api,
            destructive_actions: config.destructive_actions,
            page_size: config.page_size,
            page_limit: config.max_pages.into(),
        }
    }

    fn list_options(&self) -> ListOptions {
        ListOptions::with_page_size(self.page_size)
    }

    fn repository(result: crate::api::ApiResult<Repository>) -> Result<Repository> {
        let (repo, _) = handle_http_error(result)?;
        validate_repository(&repo)?;
        Ok(repo)
    }
}

impl GiteaClient for GiteaClientImpl {
    fn get_org(&self, org: &str) -> Result<Organization> {
        let (api_obj, _) = handle_http_error(self.api.get_org(org))?;
        validate_organization(&api_obj)?;
        Ok(api_obj)
    }

    fn list_orgs(&self) -> Result<Vec<Organization>> {
        info!("listing Gitea organizations");
        let mut opts = self.list_options();
        let orgs = collect_pages(&mut opts, self.page_limit, |opts| {
            self.api.list_my_orgs(opts)
        })?;
        validate_all(orgs, validate_organization)
    }

    fn list_org_team_members(&self, org: &str, team: &str) -> Result<Vec<User>> {
        let teams = self.list_org_teams(org)?;
        let Some(found) = teams.iter().find(|candidate| candidate.name == team) else {
            debug!(org, team, "team not found in organization");
            return Err(ProviderError::NotFound);
        };
        self.list_team_members(found.id)
    }

    fn list_team_members(&self, team_id: i64) -> Result<Vec<User>> {
        let mut opts = self.list_options();
        collect_pages(&mut opts, self.page_limit, |opts| {
            self.api.list_team_members(team_id, opts)
        })
    }

    fn list_org_teams(&self, org: &str) -> Result<Vec<Team>> {
        info!(org, "listing Gitea teams");
        let mut opts = self.list_options();
        collect_pages(&mut opts, self.page_limit, |opts| {
            self.api.list_org_teams(org, opts)
        })
    }

    fn get_repo(&self, owner: &str, repo: &str) -> Result<Repository> {
        Self::repository(self.api.get_repo(owner, repo))
    }

    fn list_org_repos(&self, org: &str) -> Result<Vec<Repository>> {
        info!(org, "listing Gitea org repos");
        let mut opts = self.list_options();
        let repos = collect_pages(&mut opts, self.page_limit, |opts| {
            self.api.list_org_repos(org, opts)
        })?;
        validate_all(repos, validate_repository)
    }

    fn list_user_repos(&self, user: &str) -> Result<Vec<Repository>> {
        info!(user, "listing Gitea user repos");
        let mut opts = self.list_options();
        let repos = collect_pages(&mut opts, self.page_limit, |opts| {
            self.api.list_user_repos(user, opts)
        })?;
        validate_all(repos, validate_repository)
    }

    fn create_repo(&self, org: &str, req: &CreateRepoOption) -> Result<Repository> {
        info!(org, name = %req.name, "creating Gitea repo");
        if org.is_empty() {
            Self::repository(self.api.create_repo(req))
        } else {
            Self::repository(self.api.create_org_repo(org, req))
        }
    }

    fn update_repo(&self, owner: &str, repo: &str, req: &EditRepoOption) -> Result<Repository> {
        Self::repository(self.api.edit_repo(owner, repo, req))
    }

    fn delete_repo(&self, owner: &str, repo: &str) -> Result<()> {
        if !self.destructive_actions {
            return Err(ProviderError::DestructiveCallDisallowed {
                operation: "delete repository",
            });
        }
        info!(owner, repo, "deleting Gitea repo");
        handle_http_error(self.api.delete_repo(owner, repo))?;
        Ok(())
    }

    fn list_keys(&self, owner: &str, repo: &str) -> Result<Vec<DeployKey>> {
        let mut opts = self.list_options();
        let keys = collect_pages(&mut opts, self.page_limit, |opts| {
            self.api.list_deploy_keys(owner, repo, opts)
        })?;
        validate_all(keys, validate_deploy_key)
    }

    fn create_key(&self, owner: &str, repo: &str, req: &CreateKeyOption) -> Result<DeployKey> {
        let (key, _) = handle_http_error(self.api.create_deploy_key(owner, repo, req))?;
        validate_deploy_key(&key)?;
        Ok(key)
    }

    fn delete_key(&self, owner: &str, repo: &str, id: i64) -> Result<()> {
        handle_http_error(self.api.delete_deploy_key(owner, repo, id))?;
        Ok(())
    }

    fn list_commits_page(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<Commit>> {
        let opts = ListCommitOptions {
            list: ListOptions {
                page,
                page_size: per_page,
            },
            sha: branch.to_string(),
        };
        let (commits, _) = handle_http_error(self.api.list_repo_commits(owner, repo, &opts))?;
        Ok(commits)
    }

    fn get_team_permissions(&self, org: &str, repo: &str, team: &str) -> Result<AccessMode> {
        let (api_obj, _) = handle_http_error(self.api.check_repo_team(org, repo, team))?;
        Ok(api_obj.permission)
    }

    fn get_repo_teams(&self, org: &str, repo: &str) -> Result<Vec<Team>> {
        let (teams, _) = handle_http_error(self.api.get_repo_teams(org, repo))?;
        Ok(teams)
    }

    fn add_team(&self, org: &str, repo: &str, team: &str) -> Result<()> {
        handle_http_error(self.api.add_repo_team(org, repo, team))?;
        Ok(())
    }

    fn remove_team(&self, org: &str, repo: &str, team: &str) -> Result<()> {
        handle_http_error(self.api.remove_repo_team(org, repo, team))?;
        Ok(())
    }

    fn list_pull_requests(&self, owner: &str, repo: &str) -> Result<Vec<PullRequest>> {
        // TODO: page through results once callers need more than the server's default page.
        let opts = ListOptions::default();
        let (prs, _) = handle_http_error(self.api.list_repo_pull_requests(owner, repo, &opts))?;
        Ok(prs)
    }

    fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        req: &CreatePullRequestOption,
    ) -> Result<PullRequest> {
        let (pr, _) = handle_http_error(self.api.create_pull_request(owner, repo, req))?;
        Ok(pr)
    }

    fn get_pull_request(&self, owner: &str, repo: &str, number: i64) -> Result<PullRequest> {
        let (pr, _) = handle_http_error(self.api.get_pull_request(owner, repo, number))?;
        Ok(pr)
    }

    fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: i64,
        req: &MergePullRequestOption,
    ) -> Result<()> {
        handle_http_error(self.api.merge_pull_request(owner, repo, number, req))?;
        Ok(())
    }
}
