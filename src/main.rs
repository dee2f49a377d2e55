//! CLI entry point for postpage

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use postpage::config::SiteConfig;
use postpage::query::{PostPageData, RouteParams};
use postpage::request::PageRequest;
use postpage::PostPage;

#[derive(Parser)]
#[command(name = "postpage")]
#[command(version)]
#[command(about = "Render one paginated blog-post page from site data", long_about = None)]
struct Cli {
    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a post page to HTML
    Render {
        /// Page data file (JSON with post, neighbors, and authors)
        data: PathBuf,

        /// Site configuration file (defaults to config.yml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Slug the page is generated under
        #[arg(short, long)]
        slug: Option<String>,

        /// Slug of the next post
        #[arg(long)]
        next: Option<String>,

        /// Slug of the previous post
        #[arg(long)]
        prev: Option<String>,

        /// URL the page is served under, query string included
        #[arg(short, long)]
        url: Option<String>,

        /// Page to show instead of the first one
        #[arg(short, long)]
        page: Option<usize>,

        /// Write the document here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postpage=debug,info"
    } else {
        "postpage=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Render {
            data,
            config,
            slug,
            next,
            prev,
            url,
            page,
            out,
        } => {
            let config = match config {
                Some(path) => SiteConfig::load(&path)?,
                None => {
                    let default_path = PathBuf::from("config.yml");
                    if default_path.exists() {
                        SiteConfig::load(&default_path)?
                    } else {
                        SiteConfig::default()
                    }
                }
            };

            let request = match url {
                Some(url) => PageRequest::parse(&url),
                None => PageRequest::offline(),
            };

            let route = RouteParams { slug, next, prev };
            let data = PostPageData::load(&data)?;

            let mut post_page = PostPage::new(config, route, data, &request)?;
            if let Some(page) = page {
                post_page.change_page(page);
            }

            let html = post_page.render()?;
            match out {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    println!("Rendered {}", path.display());
                }
                None => println!("{}", html),
            }
        }

        Commands::Version => {
            println!("postpage version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
