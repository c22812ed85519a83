use forge_core::Result;
use forge_core::model::{MergeMethod, PullRequest, RepositoryRef};
use forge_core::provider::PullRequestsClient;
use tracing::info;

use crate::convert;
use crate::models::{CreatePullRequestOption, MergePullRequestOption};
use crate::provider::ClientContext;

pub struct GiteaPullRequests {
    ctx: ClientContext,
}

impl GiteaPullRequests {
    pub(crate) fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }
}

impl PullRequestsClient for GiteaPullRequests {
    fn list(&self, repo: &RepositoryRef) -> Result<Vec<PullRequest>> {
        let prs = self
            .ctx
            .client
            .list_pull_requests(&repo.owner, &repo.name)?;
        Ok(prs.iter().map(convert::pull_request).collect())
    }

    fn create(
        &self,
        repo: &RepositoryRef,
        title: &str,
        branch: &str,
        base_branch: &str,
        description: &str,
    ) -> Result<PullRequest> {
        let req = CreatePullRequestOption {
            head: branch.to_string(),
            base: base_branch.to_string(),
            title: title.to_string(),
            body: description.to_string(),
        };
        let pr = self
            .ctx
            .client
            .create_pull_request(&repo.owner, &repo.name, &req)?;
        info!(repo = %repo, number = pr.number, "opened pull request");
        Ok(convert::pull_request(&pr))
    }

    fn get(&self, repo: &RepositoryRef, number: i64) -> Result<PullRequest> {
        let pr = self
            .ctx
            .client
            .get_pull_request(&repo.owner, &repo.name, number)?;
        Ok(convert::pull_request(&pr))
    }

    fn merge(
        &self,
        repo: &RepositoryRef,
        number: i64,
        method: MergeMethod,
        message: &str,
    ) -> Result<()> {
        let req = MergePullRequestOption {
            style: convert::merge_style(method),
            message: message.to_string(),
        };
        self.ctx
            .client
            .merge_pull_request(&repo.owner, &repo.name, number, &req)
    }
}
