use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "INKWELL_LOG";

#[derive(Parser)]
#[command(name = "inkwell")]
#[command(about = "Inkwell CLI - browse, write and manage blog posts", long_about = None)]
struct Cli {
    /// Backend base URL (overrides config.toml and INKWELL_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session credential
    Login {
        #[arg(long)]
        email: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Forget the stored session credential
    Logout,
    /// Show session and backend settings
    Status,
    /// Open a path as the app would, following redirects
    Open { path: String },
    /// List everyone's posts
    Feed {
        /// Career, Travel, Finance, Tech or "all"
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        author: Option<String>,
    },
    /// List your own posts
    Mine {
        #[arg(long)]
        category: Option<String>,
    },
    /// Write a new post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        content: String,
    },
    /// Edit one of your posts
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete one of your posts
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut ctx = commands::context::Context::load(cli.api_url)?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&mut ctx, &email, password).await?
        }
        Commands::Signup {
            name,
            email,
            password,
            confirm_password,
        } => commands::auth::signup(&mut ctx, &name, &email, password, confirm_password).await?,
        Commands::Logout => commands::auth::logout(&mut ctx).await?,
        Commands::Status => commands::auth::status(&ctx),
        Commands::Open { path } => commands::blogs::open(&mut ctx, &path).await?,
        Commands::Feed { category, author } => {
            commands::blogs::feed(&mut ctx, category.as_deref(), author).await?
        }
        Commands::Mine { category } => commands::blogs::mine(&mut ctx, category.as_deref()).await?,
        Commands::Create {
            title,
            category,
            content,
        } => commands::blogs::create(&mut ctx, title, category.as_deref(), content).await?,
        Commands::Edit {
            id,
            title,
            category,
            content,
        } => commands::blogs::edit(&mut ctx, &id, title, category.as_deref(), content).await?,
        Commands::Delete { id, yes } => commands::blogs::delete(&mut ctx, &id, yes).await?,
    }

    Ok(())
}
