//! CLI entry point for festival-site

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use festival_site::helpers::DayFilter;

#[derive(Parser)]
#[command(name = "festival-site")]
#[command(version)]
#[command(about = "Content tools for the festival website", long_about = None)]
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
    /// List site content
    List {
        /// Type of content to list (artist, post, faq, sponsor, gallery, release)
        #[arg(default_value = "artist")]
        r#type: String,

        /// Locale for localized content (defaults to the configured default locale)
        #[arg(short, long)]
        locale: Option<String>,

        /// Festival day for the lineup (all, 1, 2)
        #[arg(long, default_value = "all")]
        day: DayFilter,
    },

    /// Render a markdown file to HTML on stdout
    Render {
        /// Markdown file to render
        file: PathBuf,
    },

    /// Export content snapshots, HTML fragments and the sitemap
    #[command(alias = "g")]
    Generate {
        /// Output directory (defaults to the configured public directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "festival_site=debug,info"
    } else {
        "festival_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List {
            r#type,
            locale,
            day,
        } => {
            let site = festival_site::Site::new(&base_dir)?;
            let locale = site.config.locale_or_default(locale.as_deref());
            festival_site::commands::list::run(&site, &r#type, locale, day)?;
        }

        Commands::Render { file } => {
            let path = if file.is_absolute() {
                file
            } else {
                base_dir.join(file)
            };
            festival_site::commands::render::run(&path)?;
        }

        Commands::Generate { out } => {
            let site = festival_site::Site::new(&base_dir)?;
            tracing::info!("Generating static export...");
            match out {
                Some(out) => festival_site::commands::generate::run_into(&site, &out)?,
                None => site.generate()?,
            }
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let site = festival_site::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("festival-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
