use forge_core::Result;
use forge_core::model::{RepositoryPermission, RepositoryRef, TeamAccess};
use forge_core::provider::TeamAccessClient;
use tracing::debug;

use crate::convert;
use crate::provider::ClientContext;

pub struct GiteaTeamAccess {
    ctx: ClientContext,
}

impl GiteaTeamAccess {
    pub(crate) fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }
}

impl TeamAccessClient for GiteaTeamAccess {
    fn get(&self, repo: &RepositoryRef, team_name: &str) -> Result<TeamAccess> {
        let mode = self
            .ctx
            .client
            .get_team_permissions(&repo.owner, &repo.name, team_name)?;
        Ok(TeamAccess {
            repository: repo.clone(),
            name: team_name.to_string(),
            permission: convert::permission(mode),
        })
    }

    fn list(&self, repo: &RepositoryRef) -> Result<Vec<TeamAccess>> {
        let teams = self.ctx.client.get_repo_teams(&repo.owner, &repo.name)?;
        Ok(teams
            .into_iter()
            .map(|team| TeamAccess {
                repository: repo.clone(),
                permission: convert::permission(team.permission),
                name: team.name,
            })
            .collect())
    }

    /// Gitea grants the team's own permission; `permission` is not sent.
    fn add(
        &self,
        repo: &RepositoryRef,
        team_name: &str,
        permission: RepositoryPermission,
    ) -> Result<()> {
        debug!(
            repo = %repo,
            team = team_name,
            requested = ?convert::access_mode(permission),
            "adding team; access follows the team's permission",
        );
        self.ctx
            .client
            .add_team(&repo.owner, &repo.name, team_name)
    }

    fn remove(&self, repo: &RepositoryRef, team_name: &str) -> Result<()> {
        self.ctx
            .client
            .remove_team(&repo.owner, &repo.name, team_name)
    }
}
