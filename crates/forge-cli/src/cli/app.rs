use super::*;

pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(command = command_label(&cli.command), "Running command");

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("load config from {}", config_path.display()))?;
    let config = apply_overrides(config, cli.host.as_deref(), cli.allow_destructive);

    match cli.command {
        Commands::Token(args) => handle_token(args, &config),
        command => {
            let token = auth::resolve_token(&config.host)?;
            let provider = GiteaProvider::new(&config.provider_config(), token)
                .context("create Gitea client")?;
            dispatch(command, &provider)
        }
    }
}
