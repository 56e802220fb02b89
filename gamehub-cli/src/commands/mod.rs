pub(crate) mod categories;
pub(crate) mod config;
pub(crate) mod games;
pub(crate) mod overview;
pub(crate) mod show;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamehub_catalog::{
    Catalog, CosmicClient, Credentials, Difficulty, DifficultyKey, FetchError, Game,
};

/// Build a catalog from the configured credentials, or exit with a hint.
pub(crate) fn open_catalog() -> Catalog {
    let creds = match Credentials::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {}", "\u{2718}".if_supports_color(Stdout, |t| t.red()), e);
            eprintln!();
            eprintln!("Run 'gamehub config setup' to configure credentials.");
            std::process::exit(1);
        }
    };

    let client = match CosmicClient::new(creds) {
        Ok(c) => c,
        Err(e) => {
            eprintln!(
                "{} Failed to build HTTP client: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            std::process::exit(1);
        }
    };

    Catalog::new(client)
}

/// Spinner shown while a fetch is in flight. Hidden in quiet mode.
pub(crate) fn fetch_spinner(quiet: bool, msg: &str) -> ProgressBar {
    if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .unwrap()
                .tick_chars("/-\\|"),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

pub(crate) fn print_fetch_error(err: &FetchError) {
    eprintln!(
        "{} {}: {}",
        "\u{2718}".if_supports_color(Stdout, |t| t.red()),
        err,
        err.cause(),
    );
}

/// Truncate a string to a maximum width, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}

fn paint_by_key(key: DifficultyKey, text: String) -> String {
    match key {
        DifficultyKey::Easy => text.if_supports_color(Stdout, |t| t.green()).to_string(),
        DifficultyKey::Medium => text.if_supports_color(Stdout, |t| t.yellow()).to_string(),
        DifficultyKey::Hard => text.if_supports_color(Stdout, |t| t.red()).to_string(),
    }
}

/// Difficulty value colored by key, for detail views.
pub(crate) fn colored_difficulty(difficulty: &Difficulty) -> String {
    paint_by_key(difficulty.key, difficulty.value.clone())
}

/// Difficulty table cell, padded before coloring so the escape codes
/// don't skew column alignment.
pub(crate) fn difficulty_cell(difficulty: Option<&Difficulty>, width: usize) -> String {
    match difficulty {
        Some(d) => paint_by_key(d.key, format!("{:<width$}", truncate_str(&d.value, width))),
        None => format!("{:<width$}", "--"),
    }
}

/// Game listing shared by the games subcommand and the overview.
pub(crate) fn print_games_table(games: &[Game]) {
    println!(
        "  {:<36} {:<10} {:<8} {:<20} {}",
        "Title".if_supports_color(Stdout, |t| t.dimmed()),
        "Difficulty".if_supports_color(Stdout, |t| t.dimmed()),
        "Popular".if_supports_color(Stdout, |t| t.dimmed()),
        "Category".if_supports_color(Stdout, |t| t.dimmed()),
        "Slug".if_supports_color(Stdout, |t| t.dimmed()),
    );
    for game in games {
        let popular = if game.is_popular() { "yes" } else { "" };
        let category = game
            .category()
            .map(|c| c.display_name().to_string())
            .unwrap_or_else(|| "--".to_string());
        println!(
            "  {:<36} {} {:<8} {:<20} {}",
            truncate_str(game.display_title(), 36),
            difficulty_cell(game.difficulty(), 10),
            popular,
            truncate_str(&category, 20),
            game.slug.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}
