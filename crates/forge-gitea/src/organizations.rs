use forge_core::Result;
use forge_core::model::{Organization, OrganizationRef, Team};
use forge_core::provider::OrganizationsClient;
use tracing::debug;

use crate::convert;
use crate::provider::ClientContext;

pub struct GiteaOrganizations {
    ctx: ClientContext,
}

impl GiteaOrganizations {
    pub(crate) fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }
}

impl OrganizationsClient for GiteaOrganizations {
    fn get(&self, org: &OrganizationRef) -> Result<Organization> {
        let api_obj = self.ctx.client.get_org(&org.organization)?;
        Ok(convert::organization(&self.ctx.domain, &api_obj))
    }

    fn list(&self) -> Result<Vec<Organization>> {
        let api_objs = self.ctx.client.list_orgs()?;
        Ok(api_objs
            .iter()
            .map(|org| convert::organization(&self.ctx.domain, org))
            .collect())
    }

    fn list_teams(&self, org: &OrganizationRef) -> Result<Vec<Team>> {
        let api_objs = self.ctx.client.list_org_teams(&org.organization)?;
        debug!(org = %org, count = api_objs.len(), "resolving team members");
        api_objs
            .iter()
            .map(|team| {
                let members = self.ctx.client.list_team_members(team.id)?;
                Ok(Team {
                    organization: org.clone(),
                    name: team.name.clone(),
                    members: members.into_iter().map(|user| user.login).collect(),
                })
            })
            .collect()
    }

    fn get_team(&self, org: &OrganizationRef, team_name: &str) -> Result<Team> {
        let members = self
            .ctx
            .client
            .list_org_team_members(&org.organization, team_name)?;
        Ok(Team {
            organization: org.clone(),
            name: team_name.to_string(),
            members: members.into_iter().map(|user| user.login).collect(),
        })
    }
}
