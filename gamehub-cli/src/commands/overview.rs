use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::{fetch_spinner, open_catalog, print_fetch_error, print_games_table};

/// Entry point for `gamehub overview`. Fetches games, categories, and
/// popular picks concurrently, the way the storefront landing page does.
pub(crate) fn run_overview(quiet: bool) {
    let catalog = open_catalog();
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    rt.block_on(async {
        let pb = fetch_spinner(quiet, "Fetching catalog...");
        let result = tokio::try_join!(
            catalog.games(),
            catalog.categories(),
            catalog.popular_games(),
        );
        pb.finish_and_clear();

        let (games, categories, popular) = match result {
            Ok(t) => t,
            Err(e) => {
                print_fetch_error(&e);
                std::process::exit(1);
            }
        };

        println!(
            "{}",
            "Catalog Overview".if_supports_color(Stdout, |t| t.bold()),
        );
        println!();
        println!("  Games:      {}", games.len());
        println!("  Categories: {}", categories.len());
        println!("  Popular:    {}", popular.len());

        if !popular.is_empty() {
            println!();
            println!("{}", "Popular Games".if_supports_color(Stdout, |t| t.bold()));
            print_games_table(&popular);
        }

        if !categories.is_empty() {
            println!();
            println!("{}", "Categories".if_supports_color(Stdout, |t| t.bold()));
            for category in &categories {
                println!(
                    "  {} {:<24} {}",
                    category.icon(),
                    category.display_name(),
                    category.slug.if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
        }

        if !games.is_empty() {
            println!();
            println!("{}", "All Games".if_supports_color(Stdout, |t| t.bold()));
            print_games_table(&games);
        }
    });
}
