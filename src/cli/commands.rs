//! CLI commands and argument parsing

use crate::query::{Qualifiers, Query, SearchKind};
use crate::search::DEFAULT_HOST;
use clap::{Args, Parser, Subcommand};

/// Search repositories, issues, code and commits
#[derive(Parser, Debug)]
#[command(name = "hubsearch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Host to search
    #[arg(long, global = true, env = "GH_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Auth token
    #[arg(long, global = true, env = "GH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search repositories
    Repos {
        #[command(flatten)]
        query: QueryArgs,

        /// Filter on number of stars
        #[arg(long)]
        stars: Option<String>,

        /// Filter on topic (repeatable)
        #[arg(long)]
        topic: Vec<String>,

        /// Filter on owner
        #[arg(long)]
        owner: Vec<String>,

        /// Print the browser URL instead of searching
        #[arg(short, long)]
        web: bool,
    },

    /// Search issues and pull requests
    Issues {
        #[command(flatten)]
        query: QueryArgs,

        /// Filter on state (open, closed)
        #[arg(long)]
        state: Option<String>,

        /// Filter on label (repeatable)
        #[arg(long)]
        label: Vec<String>,

        /// Filter on repository (repeatable)
        #[arg(long)]
        repo: Vec<String>,

        /// Print the browser URL instead of searching
        #[arg(short, long)]
        web: bool,
    },

    /// Print the browser URL for a raw query
    Url {
        /// Entity type (repositories, issues, code, commits)
        #[arg(long, default_value = "repositories")]
        kind: SearchKind,

        #[command(flatten)]
        query: QueryArgs,
    },
}

/// Options shared by every search command
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Search keywords
    pub keywords: Vec<String>,

    /// Filter on language
    #[arg(long)]
    pub language: Option<String>,

    /// Maximum number of results (0 = no limit)
    #[arg(short = 'L', long, default_value = "30")]
    pub limit: usize,

    /// Sort direction
    #[arg(long)]
    pub order: Option<String>,

    /// Sort field
    #[arg(long)]
    pub sort: Option<String>,
}

impl QueryArgs {
    /// Build a query with the given extra qualifiers
    pub fn to_query(&self, kind: SearchKind, qualifiers: Qualifiers) -> Query {
        let mut query = Query::new(kind)
            .qualifiers(Qualifiers {
                language: self.language.clone(),
                ..qualifiers
            })
            .limit(self.limit)
            .order(self.order.clone().unwrap_or_default())
            .sort(self.sort.clone().unwrap_or_default());
        query.keywords.clone_from(&self.keywords);
        query
    }
}
