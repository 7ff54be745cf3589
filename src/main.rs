use aghpb::{Bookshelf, Config, RepoId, RequestOptions, commands};
use anyhow::{Context, Result};
use clap::Parser;

/// aghpb - Anime Girls Holding Programming Books
///
/// Browse the books of the repository and fetch image links.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for authentication.
/// This is useful for avoiding rate limits.
///
/// Examples:
///   aghpb books                  # List every book
///   aghpb images "C++" -n 3      # First three images of the C++ book
///   aghpb random "Visual Basic"  # Link to a random image
#[derive(Parser, Debug)]
#[command(author, version = env!("AGHPB_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Repository holding the books
    #[arg(long, value_name = "OWNER/REPO", global = true)]
    pub repo: Option<RepoId>,

    /// GitHub token sent as a bearer credential
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List all books
    Books,

    /// List the images of a book
    Images(ImagesArgs),

    /// Print a random image of a book
    Random(RandomArgs),
}

#[derive(clap::Args, Debug)]
pub struct ImagesArgs {
    /// Book name, e.g. "C++" or "Visual Basic"
    #[arg(value_name = "BOOK")]
    pub book: String,

    /// Show at most this many images (0 or negative shows all)
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

#[derive(clap::Args, Debug)]
pub struct RandomArgs {
    /// Book name, e.g. "C++" or "Visual Basic"
    #[arg(value_name = "BOOK")]
    pub book: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = Config::default();
    if let Some(api_url) = cli.api_url {
        config = config.with_api_url(api_url);
    }
    if let Some(repo) = cli.repo {
        config = config.with_repo(repo);
    }

    let shelf = Bookshelf::from_config(&config).context("Failed to create HTTP client")?;
    let options = RequestOptions {
        auth_token: cli.token,
        limit: None,
    };
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Books => commands::books(&shelf, &options, cli.json, &mut out).await?,
        Commands::Images(args) => {
            let options = RequestOptions {
                limit: args.limit,
                ..options
            };
            commands::images(&shelf, &args.book, &options, cli.json, &mut out).await?
        }
        Commands::Random(args) => {
            commands::random(&shelf, &args.book, &options, cli.json, &mut out).await?
        }
    }
    Ok(())
}
