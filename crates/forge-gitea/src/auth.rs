use anyhow::Context;
use keyring::Entry;

const SERVICE: &str = "forge-gitea";

pub const TOKEN_ENV: &str = "GITEA_TOKEN";

/// Keyring account for a Gitea host, e.g. `gitea:git.example.com`.
pub fn account_for_host(host: &str) -> String {
    let host = host
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    format!("gitea:{host}")
}

pub fn get_token(account: &str) -> anyhow::Result<String> {
    let entry = Entry::new(SERVICE, account).context("open keyring entry")?;
    entry.get_password().context("read token from keyring")
}

pub fn set_token(account: &str, token: &str) -> anyhow::Result<()> {
    let entry = Entry::new(SERVICE, account).context("open keyring entry")?;
    entry.set_password(token).context("write token to keyring")
}

/// `GITEA_TOKEN` wins over the keyring. A missing keyring entry means
/// anonymous access.
pub fn resolve_token(host: &str) -> anyhow::Result<Option<String>> {
    resolve_token_with(std::env::var(TOKEN_ENV).ok(), || {
        get_token(&account_for_host(host))
    })
}

fn resolve_token_with(
    env: Option<String>,
    keyring: impl FnOnce() -> anyhow::Result<String>,
) -> anyhow::Result<Option<String>> {
    if let Some(token) = env.filter(|token| !token.trim().is_empty()) {
        return Ok(Some(token));
    }
    match keyring() {
        Ok(token) => Ok(Some(token)),
        Err(err)
            if err
                .downcast_ref::<keyring::Error>()
                .is_some_and(|err| matches!(err, keyring::Error::NoEntry)) =>
        {
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
