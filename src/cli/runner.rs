//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::query::{Qualifiers, SearchKind};
use crate::search::Searcher;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let searcher = self.searcher()?;

        match &self.cli.command {
            Commands::Repos {
                query,
                stars,
                topic,
                owner,
                web,
            } => {
                let query = query.to_query(
                    SearchKind::Repositories,
                    Qualifiers {
                        stars: stars.clone(),
                        topic: topic.clone(),
                        user: owner.clone(),
                        ..Default::default()
                    },
                );
                if *web {
                    println!("{}", searcher.url(&query));
                    return Ok(());
                }

                let result = searcher.repositories(&query).await?;
                info!("Showing {} of {} repositories", result.len(), result.total);
                for repo in &result.items {
                    println!(
                        "{}\t{}\t{}",
                        repo.full_name,
                        repo.stars,
                        repo.description.as_deref().unwrap_or_default()
                    );
                }
                Ok(())
            }
            Commands::Issues {
                query,
                state,
                label,
                repo,
                web,
            } => {
                let query = query.to_query(
                    SearchKind::Issues,
                    Qualifiers {
                        state: state.clone(),
                        label: label.clone(),
                        repo: repo.clone(),
                        ..Default::default()
                    },
                );
                if *web {
                    println!("{}", searcher.url(&query));
                    return Ok(());
                }

                let result = searcher.issues(&query).await?;
                info!("Showing {} of {} issues", result.len(), result.total);
                for issue in &result.items {
                    println!("#{}\t{}\t{}", issue.number, issue.state, issue.title);
                }
                Ok(())
            }
            Commands::Url { kind, query } => {
                let query = query.to_query(*kind, Qualifiers::default());
                println!("{}", searcher.url(&query));
                Ok(())
            }
        }
    }

    fn searcher(&self) -> Result<Searcher> {
        let mut config = HttpClientConfig::builder();
        if let Some(token) = &self.cli.token {
            config = config.token(token);
        }
        let client = HttpClient::with_config(config.build())?;

        let searcher = Searcher::new(client, &self.cli.host)?;
        match &self.cli.api_url {
            Some(base) => searcher.with_api_base(base),
            None => Ok(searcher),
        }
    }
}
