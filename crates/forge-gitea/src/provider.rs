use std::sync::Arc;
use std::time::Duration;

use forge_core::config::ProviderConfig;
use forge_core::model::ProviderKind;
use forge_core::provider::{
    CommitsClient, DeployKeysClient, GitProvider, OrganizationsClient, PullRequestsClient,
    RepositoriesClient, TeamAccessClient,
};
use forge_core::{ProviderError, Result};

use crate::api::RestClient;
use crate::client::{GiteaClient, GiteaClientImpl};
use crate::commits::GiteaCommits;
use crate::deploy_keys::GiteaDeployKeys;
use crate::http::{HttpTransport, ReqwestTransport};
use crate::organizations::GiteaOrganizations;
use crate::pull_requests::GiteaPullRequests;
use crate::repositories::GiteaRepositories;
use crate::team_access::GiteaTeamAccess;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared by every capability client of one provider.
#[derive(Clone)]
pub(crate) struct ClientContext {
    pub(crate) client: Arc<dyn GiteaClient>,
    pub(crate) domain: String,
}

pub struct GiteaProvider {
    domain: String,
    organizations: GiteaOrganizations,
    repositories: GiteaRepositories,
    deploy_keys: GiteaDeployKeys,
    team_access: GiteaTeamAccess,
    pull_requests: GiteaPullRequests,
    commits: GiteaCommits,
}

impl GiteaProvider {
    pub fn new(config: &ProviderConfig, token: Option<String>) -> Result<Self> {
        let transport = ReqwestTransport::with_timeout(REQUEST_TIMEOUT)
            .map_err(|err| ProviderError::request(None, err))?;
        Ok(Self::with_transport(config, token, Arc::new(transport)))
    }

    pub fn with_transport(
        config: &ProviderConfig,
        token: Option<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let api = RestClient::new(&config.host, token, transport);
        let client = GiteaClientImpl::new(api, config);
        Self::with_client(config.domain(), Arc::new(client))
    }

    pub fn with_client(domain: &str, client: Arc<dyn GiteaClient>) -> Self {
        let ctx = ClientContext {
            client,
            domain: domain.to_string(),
        };
        Self {
            domain: domain.to_string(),
            organizations: GiteaOrganizations::new(ctx.clone()),
            repositories: GiteaRepositories::new(ctx.clone()),
            deploy_keys: GiteaDeployKeys::new(ctx.clone()),
            team_access: GiteaTeamAccess::new(ctx.clone()),
            pull_requests: GiteaPullRequests::new(ctx.clone()),
            commits: GiteaCommits::new(ctx),
        }
    }
}

impl GitProvider for GiteaProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gitea
    }

    fn domain(&self) -> &str {
        &self.domain
    }

    fn organizations(&self) -> &dyn OrganizationsClient {
        &self.organizations
    }

    fn repositories(&self) -> &dyn RepositoriesClient {
        &self.repositories
    }

    fn deploy_keys(&self) -> &dyn DeployKeysClient {
        &self.deploy_keys
    }

    fn team_access(&self) -> &dyn TeamAccessClient {
        &self.team_access
    }

    fn pull_requests(&self) -> &dyn PullRequestsClient {
        &self.pull_requests
    }

    fn commits(&self) -> &dyn CommitsClient {
        &self.commits
    }
}
