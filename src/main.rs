//! CLI entry point for graphcms-blog

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use graphcms_blog::content::CommentSubmission;
use graphcms_blog::Blog;

#[derive(Parser)]
#[command(name = "graphcms-blog")]
#[command(version)]
#[command(about = "A blog front-end backed by a GraphCMS content API", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default _config.yml
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// List content from the CMS
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, recent, featured, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only posts in this category (with `post`)
        #[arg(long)]
        category: Option<String>,

        /// Print the raw JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Show a post with its comments and neighbours
    Show {
        /// Slug of the post
        slug: String,

        /// Print the raw JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Submit a comment on a post
    Comment {
        /// Slug of the post
        #[arg(short, long)]
        slug: String,

        /// Commenter name
        #[arg(short, long)]
        name: String,

        /// Commenter email
        #[arg(short, long)]
        email: String,

        /// Comment text
        comment: String,
    },

    /// Start the blog server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to server.ip)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "graphcms_blog=debug,info"
    } else {
        "graphcms_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing blog in {:?}", target_dir);
            graphcms_blog::commands::init::init_site(&target_dir)?;
            println!("Initialized blog config in {:?}", target_dir);
        }

        Commands::List {
            r#type,
            category,
            json,
        } => {
            let blog = load_blog(&base_dir)?;
            let client = blog.client();
            graphcms_blog::commands::list::run(
                &client,
                &blog.config,
                &r#type,
                category.as_deref(),
                json,
            )
            .await?;
        }

        Commands::Show { slug, json } => {
            let blog = load_blog(&base_dir)?;
            let client = blog.client();
            graphcms_blog::commands::show::run(&client, &blog.config, &slug, json).await?;
        }

        Commands::Comment {
            slug,
            name,
            email,
            comment,
        } => {
            let blog = load_blog(&base_dir)?;
            let client = blog.client();
            let submission = CommentSubmission {
                name,
                email,
                comment,
                slug,
            };
            graphcms_blog::commands::comment::run(&client, &submission).await?;
        }

        Commands::Server { port, ip } => {
            let blog = load_blog(&base_dir)?;
            let ip = ip.unwrap_or_else(|| blog.config.server.ip.clone());
            let port = port.unwrap_or(blog.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            graphcms_blog::server::start(&blog, &ip, port).await?;
        }

        Commands::Version => {
            println!("graphcms-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Load the blog config and apply the endpoint from the environment
fn load_blog(base_dir: &Path) -> Result<Blog> {
    let mut blog = Blog::new(base_dir)?;
    blog.config.apply_env();
    Ok(blog)
}
