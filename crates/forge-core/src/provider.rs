use crate::Result;
use crate::model::{
    Commit, DeployKey, DeployKeyInfo, MergeMethod, Organization, OrganizationRef, ProviderKind,
    PullRequest, Repository, RepositoryInfo, RepositoryPermission, RepositoryRef, Team,
    TeamAccess, UserRef,
};

pub trait OrganizationsClient {
    fn get(&self, org: &OrganizationRef) -> Result<Organization>;
    /// Organizations the authenticated user belongs to.
    fn list(&self) -> Result<Vec<Organization>>;
    fn list_teams(&self, org: &OrganizationRef) -> Result<Vec<Team>>;
    /// Resolves a team by name and returns it with its member logins.
    fn get_team(&self, org: &OrganizationRef, team_name: &str) -> Result<Team>;
}

pub trait RepositoriesClient {
    fn get(&self, repo: &RepositoryRef) -> Result<Repository>;
    fn list_org(&self, org: &OrganizationRef) -> Result<Vec<Repository>>;
    fn list_user(&self, user: &UserRef) -> Result<Vec<Repository>>;
    fn create(&self, repo: &RepositoryRef, info: &RepositoryInfo) -> Result<Repository>;
    fn update(&self, repo: &RepositoryRef, info: &RepositoryInfo) -> Result<Repository>;
    fn delete(&self, repo: &RepositoryRef) -> Result<()>;
}

pub trait DeployKeysClient {
    fn list(&self, repo: &RepositoryRef) -> Result<Vec<DeployKey>>;
    fn create(&self, repo: &RepositoryRef, info: &DeployKeyInfo) -> Result<DeployKey>;
    fn delete(&self, repo: &RepositoryRef, id: i64) -> Result<()>;
}

pub trait TeamAccessClient {
    fn get(&self, repo: &RepositoryRef, team_name: &str) -> Result<TeamAccess>;
    fn list(&self, repo: &RepositoryRef) -> Result<Vec<TeamAccess>>;
    fn add(
        &self,
        repo: &RepositoryRef,
        team_name: &str,
        permission: RepositoryPermission,
    ) -> Result<()>;
    fn remove(&self, repo: &RepositoryRef, team_name: &str) -> Result<()>;
}

pub trait PullRequestsClient {
    fn list(&self, repo: &RepositoryRef) -> Result<Vec<PullRequest>>;
    fn create(
        &self,
        repo: &RepositoryRef,
        title: &str,
        branch: &str,
        base_branch: &str,
        description: &str,
    ) -> Result<PullRequest>;
    fn get(&self, repo: &RepositoryRef, number: i64) -> Result<PullRequest>;
    fn merge(
        &self,
        repo: &RepositoryRef,
        number: i64,
        method: MergeMethod,
        message: &str,
    ) -> Result<()>;
}

pub trait CommitsClient {
    fn list_page(
        &self,
        repo: &RepositoryRef,
        branch: &str,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<Commit>>;
}

pub trait GitProvider {
    fn kind(&self) -> ProviderKind;
    fn domain(&self) -> &str;
    fn organizations(&self) -> &dyn OrganizationsClient;
    fn repositories(&self) -> &dyn RepositoriesClient;
    fn deploy_keys(&self) -> &dyn DeployKeysClient;
    fn team_access(&self) -> &dyn TeamAccessClient;
    fn pull_requests(&self) -> &dyn PullRequestsClient;
    fn commits(&self) -> &dyn CommitsClient;
}
