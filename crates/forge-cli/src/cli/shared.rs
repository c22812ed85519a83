use super::*;

pub(in crate::cli) fn apply_overrides(
    mut config: AppConfig,
    host: Option<&str>,
    allow_destructive: bool,
) -> AppConfig {
    if let Some(host) = host {
        config.host = host.trim_end_matches('/').to_string();
    }
    if allow_destructive {
        config.destructive_actions = true;
    }
    config
}

pub(in crate::cli) fn status_hint(status: u16) -> Option<&'static str> {
    match status {
        401 | 403 => Some("check the token in GITEA_TOKEN or run `forge-cli token set`"),
        404 => Some("check the owner, repository and team names"),
        _ => None,
    }
}

pub(in crate::cli) fn map_provider_error(action: &str, err: ProviderError) -> anyhow::Error {
    let message = match &err {
        ProviderError::DestructiveCallDisallowed { .. } => {
            format!("{action} refused; pass --allow-destructive to permit it")
        }
        _ => match err.status().and_then(status_hint) {
            Some(hint) => format!("{action} failed ({hint})"),
            None => format!("{action} failed"),
        },
    };
    anyhow::Error::new(err).context(message)
}

pub(in crate::cli) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{rendered}");
    Ok(())
}
