//! In-memory [`GiteaClient`] used by the provider client tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use forge_core::{ProviderError, Result};

use crate::client::GiteaClient;
use crate::models::{
    AccessMode, Commit, CreateKeyOption, CreatePullRequestOption, CreateRepoOption, DeployKey,
    EditRepoOption, MergePullRequestOption, Organization, PrBranch, PullRequest, Repository, Team,
    User,
};
use crate::provider::ClientContext;

pub(crate) const DOMAIN: &str = "git.example.com";

#[derive(Default)]
pub(crate) struct FakeState {
    pub(crate) orgs: Vec<Organization>,
    pub(crate) teams: HashMap<String, Vec<(Team, Vec<User>)>>,
    pub(crate) repos: Vec<Repository>,
    pub(crate) keys: HashMap<String, Vec<DeployKey>>,
    pub(crate) repo_teams: HashMap<String, Vec<Team>>,
    pub(crate) pulls: HashMap<String, Vec<PullRequest>>,
    pub(crate) commits: Vec<Commit>,
    pub(crate) calls: Vec<String>,
    pub(crate) merges: Vec<(i64, MergePullRequestOption)>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeGiteaClient {
    state: Arc<Mutex<FakeState>>,
}

impl FakeGiteaClient {
    pub(crate) fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    fn record(&self, call: String) -> MutexGuard<'_, FakeState> {
        let mut state = self.state();
        state.calls.push(call);
        state
    }
}

pub(crate) fn context(fake: &FakeGiteaClient) -> ClientContext {
    ClientContext {
        client: Arc::new(fake.clone()),
        domain: DOMAIN.to_string(),
    }
}

pub(crate) fn user(login: &str) -> User {
    User {
        login: login.to_string(),
        ..User::default()
    }
}

pub(crate) fn org(login: &str) -> Organization {
    Organization {
        username: login.to_string(),
        ..Organization::default()
    }
}

pub(crate) fn team(id: i64, name: &str) -> Team {
    Team {
        id,
        name: name.to_string(),
        ..Team::default()
    }
}

pub(crate) fn repo(owner: &str, name: &str) -> Repository {
    Repository {
        owner: Some(user(owner)),
        name: name.to_string(),
        full_name: format!("{owner}/{name}"),
        private: true,
        ..Repository::default()
    }
}

pub(crate) fn pull(number: i64, head: &str, base: &str) -> PullRequest {
    PullRequest {
        number,
        title: format!("PR {number}"),
        head: Some(PrBranch {
            reference: head.to_string(),
            ..PrBranch::default()
        }),
        base: Some(PrBranch {
            reference: base.to_string(),
            ..PrBranch::default()
        }),
        ..PullRequest::default()
    }
}

fn key_of(owner: &str, repo: &str) -> String {
    format!("{owner}/{repo}")
}

impl GiteaClient for FakeGiteaClient {
    fn get_org(&self, org: &str) -> Result<Organization> {
        let state = self.record(format!("get_org {org}"));
        state
            .orgs
            .iter()
            .find(|candidate| candidate.login() == org)
            .cloned()
            .ok_or(ProviderError::NotFound)
    }

    fn list_orgs(&self) -> Result<Vec<Organization>> {
        let state = self.record("list_orgs".to_string());
        Ok(state.orgs.clone())
    }

    fn list_org_team_members(&self, org: &str, team: &str) -> Result<Vec<User>> {
        let state = self.record(format!("list_org_team_members {org} {team}"));
        state
            .teams
            .get(org)
            .and_then(|teams| teams.iter().find(|(candidate, _)| candidate.name == team))
            .map(|(_, members)| members.clone())
            .ok_or(ProviderError::NotFound)
    }

    fn list_team_members(&self, team_id: i64) -> Result<Vec<User>> {
        let state = self.record(format!("list_team_members {team_id}"));
        state
            .teams
            .values()
            .flatten()
            .find(|(team, _)| team.id == team_id)
            .map(|(_, members)| members.clone())
            .ok_or(ProviderError::NotFound)
    }

    fn list_org_teams(&self, org: &str) -> Result<Vec<Team>> {
        let state = self.record(format!("list_org_teams {org}"));
        Ok(state
            .teams
            .get(org)
            .map(|teams| teams.iter().map(|(team, _)| team.clone()).collect())
            .unwrap_or_default())
    }

    fn get_repo(&self, owner: &str, repo: &str) -> Result<Repository> {
        let state = self.record(format!("get_repo {owner}/{repo}"));
        let full_name = key_of(owner, repo);
        state
            .repos
            .iter()
            .find(|candidate| candidate.full_name == full_name)
            .cloned()
            .ok_or(ProviderError::NotFound)
    }

    fn list_org_repos(&self, org: &str) -> Result<Vec<Repository>> {
        let state = self.record(format!("list_org_repos {org}"));
        Ok(owned_by(&state.repos, org))
    }

    fn list_user_repos(&self, user: &str) -> Result<Vec<Repository>> {
        let state = self.record(format!("list_user_repos {user}"));
        Ok(owned_by(&state.repos, user))
    }

    fn create_repo(&self, org: &str, req: &CreateRepoOption) -> Result<Repository> {
        let mut state = self.record(format!("create_repo {org:?} {}", req.name));
        let owner = if org.is_empty() { "me" } else { org };
        let mut created = repo(owner, &req.name);
        created.description = req.description.clone();
        created.private = req.private;
        created.default_branch = req.default_branch.clone();
        state.repos.push(created.clone());
        Ok(created)
    }

    fn update_repo(&self, owner: &str, repo: &str, req: &EditRepoOption) -> Result<Repository> {
        let mut state = self.record(format!("update_repo {owner}/{repo}"));
        let full_name = key_of(owner, repo);
        let existing = state
            .repos
            .iter_mut()
            .find(|candidate| candidate.full_name == full_name)
            .ok_or(ProviderError::NotFound)?;
        if let Some(description) = &req.description {
            existing.description = description.clone();
        }
        if let Some(private) = req.private {
            existing.private = private;
        }
        if let Some(branch) = &req.default_branch {
            existing.default_branch = branch.clone();
        }
        Ok(existing.clone())
    }

    fn delete_repo(&self, owner: &str, repo: &str) -> Result<()> {
        let mut state = self.record(format!("delete_repo {owner}/{repo}"));
        let full_name = key_of(owner, repo);
        let before = state.repos.len();
        state.repos.retain(|candidate| candidate.full_name != full_name);
        if state.repos.len() == before {
            return Err(ProviderError::NotFound);
        }
        Ok(())
    }

    fn list_keys(&self, owner: &str, repo: &str) -> Result<Vec<DeployKey>> {
        let state = self.record(format!("list_keys {owner}/{repo}"));
        Ok(state
            .keys
            .get(&key_of(owner, repo))
            .cloned()
            .unwrap_or_default())
    }

    fn create_key(&self, owner: &str, repo: &str, req: &CreateKeyOption) -> Result<DeployKey> {
        let mut state = self.record(format!("create_key {owner}/{repo} {}", req.title));
        let keys = state.keys.entry(key_of(owner, repo)).or_default();
        let created = DeployKey {
            id: keys.len() as i64 + 1,
            key: req.key.clone(),
            title: req.title.clone(),
            read_only: req.read_only,
            ..DeployKey::default()
        };
        keys.push(created.clone());
        Ok(created)
    }

    fn delete_key(&self, owner: &str, repo: &str, id: i64) -> Result<()> {
        let mut state = self.record(format!("delete_key {owner}/{repo} {id}"));
        let keys = state.keys.entry(key_of(owner, repo)).or_default();
        let before = keys.len();
        keys.retain(|key| key.id != id);
        if keys.len() == before {
            return Err(ProviderError::NotFound);
        }
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
        let state = self.record(format!(
            "list_commits_page {owner}/{repo} {branch} {per_page} {page}"
        ));
        let per_page = per_page.max(1) as usize;
        let skip = page.saturating_sub(1) as usize * per_page;
        Ok(state.commits.iter().skip(skip).take(per_page).cloned().collect())
    }

    fn get_team_permissions(&self, org: &str, repo: &str, team: &str) -> Result<AccessMode> {
        let state = self.record(format!("get_team_permissions {org}/{repo} {team}"));
        state
            .repo_teams
            .get(&key_of(org, repo))
            .and_then(|teams| teams.iter().find(|candidate| candidate.name == team))
            .map(|team| team.permission)
            .ok_or(ProviderError::NotFound)
    }

    fn get_repo_teams(&self, org: &str, repo: &str) -> Result<Vec<Team>> {
        let state = self.record(format!("get_repo_teams {org}/{repo}"));
        Ok(state
            .repo_teams
            .get(&key_of(org, repo))
            .cloned()
            .unwrap_or_default())
    }

    fn add_team(&self, org: &str, repo: &str, team: &str) -> Result<()> {
        let mut state = self.record(format!("add_team {org}/{repo} {team}"));
        let found = state
            .teams
            .get(org)
            .and_then(|teams| teams.iter().find(|(candidate, _)| candidate.name == team))
            .map(|(team, _)| team.clone())
            .ok_or(ProviderError::NotFound)?;
        state
            .repo_teams
            .entry(key_of(org, repo))
            .or_default()
            .push(found);
        Ok(())
    }

    fn remove_team(&self, org: &str, repo: &str, team: &str) -> Result<()> {
        let mut state = self.record(format!("remove_team {org}/{repo} {team}"));
        let teams = state.repo_teams.entry(key_of(org, repo)).or_default();
        let before = teams.len();
        teams.retain(|candidate| candidate.name != team);
        if teams.len() == before {
            return Err(ProviderError::NotFound);
        }
        Ok(())
    }

    fn list_pull_requests(&self, owner: &str, repo: &str) -> Result<Vec<PullRequest>> {
        let state = self.record(format!("list_pull_requests {owner}/{repo}"));
        Ok(state
            .pulls
            .get(&key_of(owner, repo))
            .cloned()
            .unwrap_or_default())
    }

    fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        req: &CreatePullRequestOption,
    ) -> Result<PullRequest> {
        let mut state = self.record(format!("create_pull_request {owner}/{repo}"));
        let pulls = state.pulls.entry(key_of(owner, repo)).or_default();
        let mut created = pull(pulls.len() as i64 + 1, &req.head, &req.base);
        created.title = req.title.clone();
        created.body = req.body.clone();
        pulls.push(created.clone());
        Ok(created)
    }

    fn get_pull_request(&self, owner: &str, repo: &str, number: i64) -> Result<PullRequest> {
        let state = self.record(format!("get_pull_request {owner}/{repo} {number}"));
        state
            .pulls
            .get(&key_of(owner, repo))
            .and_then(|pulls| pulls.iter().find(|pr| pr.number == number))
            .cloned()
            .ok_or(ProviderError::NotFound)
    }

    fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: i64,
        req: &MergePullRequestOption,
    ) -> Result<()> {
        let mut state = self.record(format!("merge_pull_request {owner}/{repo} {number}"));
        let pr = state
            .pulls
            .get_mut(&key_of(owner, repo))
            .and_then(|pulls| pulls.iter_mut().find(|pr| pr.number == number))
            .ok_or(ProviderError::NotFound)?;
        pr.merged = true;
        state.merges.push((number, req.clone()));
        Ok(())
    }
}

fn owned_by(repos: &[Repository], owner: &str) -> Vec<Repository> {
    repos
        .iter()
        .filter(|repo| {
            repo.owner
                .as_ref()
                .is_some_and(|candidate| candidate.login == owner)
        })
        .cloned()
        .collect()
}
