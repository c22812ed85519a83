use super::*;

#[derive(Parser)]
#[command(author, version, about = "Inspect and manage a Gitea instance")]
pub(super) struct Cli {
    #[arg(long, global = true, help = "Path to the config file")]
    pub(super) config: Option<PathBuf>,
    #[arg(long, global = true, help = "Gitea base URL, overrides the config")]
    pub(super) host: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Allow destructive calls such as repository deletion"
    )]
    pub(super) allow_destructive: bool,
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(clap::Subcommand)]
pub(super) enum Commands {
    #[command(about = "Organizations of the authenticated user")]
    Orgs(OrgsArgs),
    #[command(about = "Organization teams")]
    Teams(TeamsArgs),
    #[command(about = "Repositories")]
    Repos(ReposArgs),
    #[command(about = "Repository deploy keys")]
    Keys(KeysArgs),
    #[command(about = "Teams with access to a repository")]
    TeamAccess(TeamAccessArgs),
    #[command(about = "Pull requests")]
    Pulls(PullsArgs),
    #[command(about = "Manage the access token")]
    Token(TokenArgs),
}

#[derive(Parser)]
pub(super) struct OrgsArgs {
    #[command(subcommand)]
    pub(super) command: OrgsCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum OrgsCommands {
    #[command(about = "List organizations")]
    List,
    #[command(about = "Show one organization")]
    Get(OrgArg),
}

#[derive(Parser)]
pub(super) struct OrgArg {
    pub(super) org: String,
}

#[derive(Parser)]
pub(super) struct TeamsArgs {
    #[command(subcommand)]
    pub(super) command: TeamsCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum TeamsCommands {
    #[command(about = "List teams with their members")]
    List(OrgArg),
    #[command(about = "Show the members of one team")]
    Members(TeamMembersArgs),
}

#[derive(Parser)]
pub(super) struct TeamMembersArgs {
    pub(super) org: String,
    pub(super) team: String,
}

#[derive(Parser)]
pub(super) struct ReposArgs {
    #[command(subcommand)]
    pub(super) command: ReposCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum ReposCommands {
    #[command(about = "List repositories of an organization or user")]
    List(ListReposArgs),
    #[command(about = "Show one repository")]
    Get(RepoArg),
    #[command(about = "Delete a repository (needs --allow-destructive)")]
    Delete(RepoArg),
}

#[derive(Parser)]
pub(super) struct ListReposArgs {
    #[arg(long, conflicts_with = "user", required_unless_present = "user")]
    pub(super) org: Option<String>,
    #[arg(long)]
    pub(super) user: Option<String>,
}

#[derive(Parser)]
pub(super) struct RepoArg {
    #[arg(help = "Repository as owner/name")]
    pub(super) repo: String,
}

#[derive(Parser)]
pub(super) struct KeysArgs {
    #[command(subcommand)]
    pub(super) command: RepoListCommands,
}

#[derive(Parser)]
pub(super) struct TeamAccessArgs {
    #[command(subcommand)]
    pub(super) command: RepoListCommands,
}

#[derive(Parser)]
pub(super) struct PullsArgs {
    #[command(subcommand)]
    pub(super) command: RepoListCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum RepoListCommands {
    #[command(about = "List for one repository")]
    List(RepoArg),
}

#[derive(Parser)]
pub(super) struct TokenArgs {
    #[command(subcommand)]
    pub(super) command: TokenCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum TokenCommands {
    #[command(about = "Store a personal access token in the OS keyring")]
    Set(SetTokenArgs),
}

#[derive(Parser)]
pub(super) struct SetTokenArgs {
    #[arg(long)]
    pub(super) token: String,
}

pub(super) fn command_label(command: &Commands) -> &'static str {
    match command {
        Commands::Orgs(_) => "orgs",
        Commands::Teams(_) => "teams",
        Commands::Repos(_) => "repos",
        Commands::Keys(_) => "keys",
        Commands::TeamAccess(_) => "team-access",
        Commands::Pulls(_) => "pulls",
        Commands::Token(_) => "token",
    }
}
