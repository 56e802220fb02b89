use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::{fetch_spinner, open_catalog, print_fetch_error, truncate_str};

/// Entry point for `gamehub categories`.
pub(crate) fn run_categories(quiet: bool) {
    let catalog = open_catalog();
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    rt.block_on(async {
        let pb = fetch_spinner(quiet, "Fetching categories...");
        let result = catalog.categories().await;
        pb.finish_and_clear();

        let categories = match result {
            Ok(c) => c,
            Err(e) => {
                print_fetch_error(&e);
                std::process::exit(1);
            }
        };

        if categories.is_empty() {
            println!("No categories found.");
            return;
        }

        for category in &categories {
            let description = category.description().unwrap_or("");
            println!(
                "  {} {:<24} {:<40} {}",
                category.icon(),
                category.display_name(),
                truncate_str(description, 40),
                category.slug.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        println!();
        println!("{} categories.", categories.len());
    });
}
