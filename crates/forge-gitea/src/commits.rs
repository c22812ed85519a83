use forge_core::Result;
use forge_core::model::{Commit, RepositoryRef};
use forge_core::provider::CommitsClient;

use crate::convert;
use crate::provider::ClientContext;

pub struct GiteaCommits {
    ctx: ClientContext,
}

impl GiteaCommits {
    pub(crate) fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }
}

impl CommitsClient for GiteaCommits {
    fn list_page(
        &self,
        repo: &RepositoryRef,
        branch: &str,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<Commit>> {
        let client = &self.ctx.client;
        let commits = client.list_commits_page(&repo.owner, &repo.name, branch, per_page, page)?;
        Ok(commits.iter().map(convert::commit).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{self, CommitDetails, CommitUser};
    use crate::testing::{DOMAIN, FakeGiteaClient, context};

    fn commit(sha: &str) -> models::Commit {
        models::Commit {
            sha: sha.to_string(),
            commit: Some(CommitDetails {
                message: format!("commit {sha}"),
                author: Some(CommitUser {
                    name: "Alice".to_string(),
                    ..CommitUser::default()
                }),
            }),
            ..models::Commit::default()
        }
    }

    #[test]
    fn returns_the_requested_page() {
        let fake = FakeGiteaClient::default();
        fake.state().commits = vec![commit("a"), commit("b"), commit("c")];
        let client = GiteaCommits::new(context(&fake));
        let repo = RepositoryRef::parse(DOMAIN, "acme/tools").unwrap();

        let page = client.list_page(&repo, "main", 2, 2).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].sha, "c");
        assert_eq!(page[0].message, "commit c");
        assert_eq!(page[0].author.as_deref(), Some("Alice"));
        assert_eq!(fake.calls(), vec!["list_commits_page acme/tools main 2 2"]);
    }
}
