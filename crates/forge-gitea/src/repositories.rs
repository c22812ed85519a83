use forge_core::Result;
use forge_core::model::{OrganizationRef, Repository, RepositoryInfo, RepositoryRef, UserRef};
use forge_core::provider::RepositoriesClient;
use tracing::info;

use crate::convert;
use crate::models;
use crate::provider::ClientContext;

pub struct GiteaRepositories {
    ctx: ClientContext,
}

impl GiteaRepositories {
    pub(crate) fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }

    fn convert_all(&self, owner_is_org: bool, repos: Vec<models::Repository>) -> Vec<Repository> {
        repos
            .iter()
            .map(|repo| convert::repository(&self.ctx.domain, owner_is_org, repo))
            .collect()
    }
}

impl RepositoriesClient for GiteaRepositories {
    fn get(&self, repo: &RepositoryRef) -> Result<Repository> {
        let api_obj = self.ctx.client.get_repo(&repo.owner, &repo.name)?;
        Ok(convert::repository(&self.ctx.domain, repo.owner_is_org, &api_obj))
    }

    fn list_org(&self, org: &OrganizationRef) -> Result<Vec<Repository>> {
        let repos = self.ctx.client.list_org_repos(&org.organization)?;
        Ok(self.convert_all(true, repos))
    }

    fn list_user(&self, user: &UserRef) -> Result<Vec<Repository>> {
        let repos = self.ctx.client.list_user_repos(&user.login)?;
        Ok(self.convert_all(false, repos))
    }

    fn create(&self, repo: &RepositoryRef, info: &RepositoryInfo) -> Result<Repository> {
        let org = if repo.owner_is_org { repo.owner.as_str() } else { "" };
        let req = convert::create_repo_option(&repo.name, info);
        let api_obj = self.ctx.client.create_repo(org, &req)?;
        info!(repo = %repo, "created repository");
        Ok(convert::repository(&self.ctx.domain, repo.owner_is_org, &api_obj))
    }

    fn update(&self, repo: &RepositoryRef, info: &RepositoryInfo) -> Result<Repository> {
        let req = convert::edit_repo_option(info);
        let api_obj = self.ctx.client.update_repo(&repo.owner, &repo.name, &req)?;
        Ok(convert::repository(&self.ctx.domain, repo.owner_is_org, &api_obj))
    }

    fn delete(&self, repo: &RepositoryRef) -> Result<()> {
        self.ctx.client.delete_repo(&repo.owner, &repo.name)
    }
}
