//! gamehub CLI
//!
//! Command-line interface for browsing the games catalog stored in Cosmic.

use clap::{Parser, Subcommand};

use gamehub_catalog::DifficultyKey;

mod commands;

#[derive(Parser)]
#[command(name = "gamehub")]
#[command(about = "Browse the games catalog", long_about = None)]
struct Cli {
    /// Suppress progress spinners
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List games, popular ones first
    Games {
        /// Only games in this category (slug, e.g. puzzle-games)
        #[arg(long, conflicts_with_all = ["difficulty", "popular"])]
        category: Option<String>,

        /// Only games with this difficulty (easy, medium, hard)
        #[arg(long, conflicts_with = "popular")]
        difficulty: Option<DifficultyKey>,

        /// Only games flagged as popular
        #[arg(long)]
        popular: bool,
    },

    /// List all categories
    Categories,

    /// Show a single game in detail
    Show {
        /// Game slug (e.g. tetris)
        slug: String,
    },

    /// Summarize the catalog: games, categories, popular picks
    Overview,

    /// Manage Cosmic credentials configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current credentials and their sources
    Show,

    /// Interactively set up credentials
    Setup,

    /// Test credentials against the Cosmic API
    Test,

    /// Print the config file path
    Path,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Games {
            category,
            difficulty,
            popular,
        } => commands::games::run_games(category, difficulty, popular, cli.quiet),
        Commands::Categories => commands::categories::run_categories(cli.quiet),
        Commands::Show { slug } => commands::show::run_show(&slug, cli.quiet),
        Commands::Overview => commands::overview::run_overview(cli.quiet),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Setup => commands::config::run_config_setup(),
            ConfigAction::Test => commands::config::run_config_test(cli.quiet),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}
