use clap::{
    Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use plweave::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(flatten)]
    credentials: CredentialOptions,

    #[clap(subcommand)]
    command: Command,
}

/// Overrides for the values read from the environment / .env
#[derive(Args, Debug, Clone)]
pub struct CredentialOptions {
    /// Spotify application client ID
    #[clap(long, global = true, env = "SPOTIFY_API_AUTH_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Spotify application client secret
    #[clap(long, global = true, env = "SPOTIFY_API_AUTH_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Redirect URI registered for the application
    #[clap(long, global = true, env = "SPOTIFY_API_REDIRECT_URI")]
    pub redirect_uri: Option<String>,
}

impl CredentialOptions {
    fn into_credentials(self) -> config::Credentials {
        config::Credentials::from_env().with_overrides(
            self.client_id,
            self.client_secret,
            self.redirect_uri,
        )
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List your playlists with their index
    Playlists,

    /// Interleave a playlist's tracks by the user who added them
    Sort(SortOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SortOptions {
    /// Index of the playlist as shown by `playlists`
    #[clap(long, conflicts_with = "name")]
    pub index: Option<usize>,

    /// Name of the playlist (case-insensitive)
    #[clap(long)]
    pub name: Option<String>,

    /// Show the new order per contributor without changing the playlist
    #[clap(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env() {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();
    let credentials = cli.credentials.into_credentials();

    match cli.command {
        Command::Playlists => cli::playlists(credentials).await,
        Command::Sort(opt) => cli::sort(credentials, opt.index, opt.name, opt.dry_run).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
