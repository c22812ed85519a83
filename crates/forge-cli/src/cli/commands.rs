use super::*;

pub(super) fn dispatch(command: Commands, provider: &dyn GitProvider) -> anyhow::Result<()> {
    match command {
        Commands::Orgs(args) => handle_orgs(args, provider),
        Commands::Teams(args) => handle_teams(args, provider),
        Commands::Repos(args) => handle_repos(args, provider),
        Commands::Keys(args) => {
            let RepoListCommands::List(arg) = args.command;
            let repo = parse_repo(provider, &arg.repo)?;
            let keys = provider
                .deploy_keys()
                .list(&repo)
                .map_err(|err| map_provider_error("list deploy keys", err))?;
            print_json(&keys)
        }
        Commands::TeamAccess(args) => {
            let RepoListCommands::List(arg) = args.command;
            let repo = parse_repo(provider, &arg.repo)?;
            let access = provider
                .team_access()
                .list(&repo)
                .map_err(|err| map_provider_error("list team access", err))?;
            print_json(&access)
        }
        Commands::Pulls(args) => {
            let RepoListCommands::List(arg) = args.command;
            let repo = parse_repo(provider, &arg.repo)?;
            let pulls = provider
                .pull_requests()
                .list(&repo)
                .map_err(|err| map_provider_error("list pull requests", err))?;
            print_json(&pulls)
        }
        Commands::Token(_) => anyhow::bail!("token commands do not talk to the server"),
    }
}

fn parse_repo(provider: &dyn GitProvider, value: &str) -> anyhow::Result<RepositoryRef> {
    Ok(RepositoryRef::parse(provider.domain(), value)?)
}

fn handle_orgs(args: OrgsArgs, provider: &dyn GitProvider) -> anyhow::Result<()> {
    match args.command {
        OrgsCommands::List => {
            let orgs = provider
                .organizations()
                .list()
                .map_err(|err| map_provider_error("list organizations", err))?;
            print_json(&orgs)
        }
        OrgsCommands::Get(arg) => {
            let org = OrganizationRef::new(provider.domain(), arg.org);
            let org = provider
                .organizations()
                .get(&org)
                .map_err(|err| map_provider_error("get organization", err))?;
            print_json(&org)
        }
    }
}

fn handle_teams(args: TeamsArgs, provider: &dyn GitProvider) -> anyhow::Result<()> {
    match args.command {
        TeamsCommands::List(arg) => {
            let org = OrganizationRef::new(provider.domain(), arg.org);
            let teams = provider
                .organizations()
                .list_teams(&org)
                .map_err(|err| map_provider_error("list teams", err))?;
            print_json(&teams)
        }
        TeamsCommands::Members(args) => {
            let org = OrganizationRef::new(provider.domain(), args.org);
            let team = provider
                .organizations()
                .get_team(&org, &args.team)
                .map_err(|err| map_provider_error("get team", err))?;
            print_json(&team.members)
        }
    }
}

fn handle_repos(args: ReposArgs, provider: &dyn GitProvider) -> anyhow::Result<()> {
    let repos = provider.repositories();
    match args.command {
        ReposCommands::List(args) => {
            let listed = match (args.org, args.user) {
                (Some(org), _) => repos.list_org(&OrganizationRef::new(provider.domain(), org)),
                (None, Some(user)) => repos.list_user(&UserRef::new(provider.domain(), user)),
                (None, None) => anyhow::bail!("pass --org or --user"),
            }
            .map_err(|err| map_provider_error("list repositories", err))?;
            print_json(&listed)
        }
        ReposCommands::Get(arg) => {
            let repo = parse_repo(provider, &arg.repo)?;
            let found = repos
                .get(&repo)
                .map_err(|err| map_provider_error("get repository", err))?;
            print_json(&found)
        }
        ReposCommands::Delete(arg) => {
            let repo = parse_repo(provider, &arg.repo)?;
            repos
                .delete(&repo)
                .map_err(|err| map_provider_error("delete repository", err))?;
            info!(repo = %repo, "deleted repository");
            println!("Deleted {}", repo.full_name());
            Ok(())
        }
    }
}
