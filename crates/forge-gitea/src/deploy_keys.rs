use forge_core::Result;
use forge_core::model::{DeployKey, DeployKeyInfo, RepositoryRef};
use forge_core::provider::DeployKeysClient;
use tracing::info;

use crate::convert;
use crate::provider::ClientContext;

pub struct GiteaDeployKeys {
    ctx: ClientContext,
}

impl GiteaDeployKeys {
    pub(crate) fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }
}

impl DeployKeysClient for GiteaDeployKeys {
    fn list(&self, repo: &RepositoryRef) -> Result<Vec<DeployKey>> {
        let keys = self.ctx.client.list_keys(&repo.owner, &repo.name)?;
        Ok(keys.iter().map(|key| convert::deploy_key(repo, key)).collect())
    }

    fn create(&self, repo: &RepositoryRef, info: &DeployKeyInfo) -> Result<DeployKey> {
        let req = convert::create_key_option(info);
        let key = self.ctx.client.create_key(&repo.owner, &repo.name, &req)?;
        info!(repo = %repo, name = %info.name, "created deploy key");
        Ok(convert::deploy_key(repo, &key))
    }

    fn delete(&self, repo: &RepositoryRef, id: i64) -> Result<()> {
        self.ctx.client.delete_key(&repo.owner, &repo.name, id)
    }
}
