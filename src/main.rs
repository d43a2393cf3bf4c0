//! CineSpace CLI
//!
//! A command-line front end for searching and browsing the movie catalog.

use cinespace::cli::{
    args::{Cli, Commands},
    commands::{browse, categories, search, show},
};
use cinespace::core::loader::DataSource;
use cinespace::models::config;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = config::load_config();
    let source = DataSource::parse(cli.data.as_deref().unwrap_or(&config.data_source));
    tracing::debug!("Using movie data from {}", source);

    // Run the appropriate command
    match cli.command {
        Commands::Search {
            term,
            category,
            limit,
            format,
        } => {
            search::execute_search(&source, &term, category.as_deref(), limit, &format).await?;
        }

        Commands::Browse {
            category,
            filter,
            page,
            page_size,
            format,
        } => {
            let mut policy = config.browse.clone();
            if let Some(size) = page_size {
                policy.page_size = size;
            }
            browse::execute_browse(&source, &category, &filter, page, &policy, &format).await?;
        }

        Commands::Show { id, format } => {
            show::show_movie(&source, &id, config.related_limit, &format).await?;
        }

        Commands::Categories => {
            categories::list_categories(&source).await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("cinespace=debug")
    } else {
        EnvFilter::new("cinespace=info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
