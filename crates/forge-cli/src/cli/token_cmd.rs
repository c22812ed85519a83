use super::*;

pub(super) fn handle_token(args: TokenArgs, config: &AppConfig) -> anyhow::Result<()> {
    match args.command {
        TokenCommands::Set(args) => handle_set_token(args, config),
    }
}

fn handle_set_token(args: SetTokenArgs, config: &AppConfig) -> anyhow::Result<()> {
    if args.token.trim().is_empty() {
        anyhow::bail!("token must not be empty");
    }
    let account = auth::account_for_host(&config.host);
    auth::set_token(&account, &args.token)?;
    auth::get_token(&account).context("read token from keyring after write")?;
    info!(account = %account, "stored token");
    println!("Token stored for {account}");
    Ok(())
}
