use gamehub_catalog::DifficultyKey;

use super::{fetch_spinner, open_catalog, print_fetch_error, print_games_table};

/// Entry point for `gamehub games`.
pub(crate) fn run_games(
    category: Option<String>,
    difficulty: Option<DifficultyKey>,
    popular: bool,
    quiet: bool,
) {
    let catalog = open_catalog();
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    rt.block_on(async {
        let pb = fetch_spinner(quiet, "Fetching games...");
        let result = if let Some(ref slug) = category {
            catalog.games_by_category(slug).await
        } else if let Some(key) = difficulty {
            catalog.games_by_difficulty(key).await
        } else if popular {
            catalog.popular_games().await
        } else {
            catalog.games().await
        };
        pb.finish_and_clear();

        let games = match result {
            Ok(g) => g,
            Err(e) => {
                print_fetch_error(&e);
                std::process::exit(1);
            }
        };

        if games.is_empty() {
            if let Some(ref slug) = category {
                println!("No games found for category \"{}\".", slug);
            } else if let Some(key) = difficulty {
                println!("No games found for difficulty \"{}\".", key);
            } else if popular {
                println!("No popular games found.");
            } else {
                println!("No games found.");
            }
            return;
        }

        print_games_table(&games);
        println!();
        println!("{} games.", games.len());
    });
}
