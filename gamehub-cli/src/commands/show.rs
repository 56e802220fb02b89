use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamehub_catalog::Game;

use super::{colored_difficulty, fetch_spinner, open_catalog, print_fetch_error};

/// Entry point for `gamehub show <slug>`.
pub(crate) fn run_show(slug: &str, quiet: bool) {
    let catalog = open_catalog();
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    rt.block_on(async {
        let pb = fetch_spinner(quiet, "Fetching game...");
        let result = catalog.game(slug).await;
        pb.finish_and_clear();

        let game = match result {
            Ok(Some(g)) => g,
            Ok(None) => {
                println!("No game found with slug \"{}\".", slug);
                return;
            }
            Err(e) => {
                print_fetch_error(&e);
                std::process::exit(1);
            }
        };

        print_game_detail(&game);
    });
}

fn print_game_detail(game: &Game) {
    println!(
        "{}",
        game.display_title().if_supports_color(Stdout, |t| t.bold()),
    );
    if game.is_popular() {
        println!(
            "{}",
            "\u{2B50} Popular".if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    println!();

    println!("  Slug:       {}", game.slug);
    let difficulty = game
        .difficulty()
        .map(colored_difficulty)
        .unwrap_or_else(|| "--".to_string());
    println!("  Difficulty: {}", difficulty);
    let category = game
        .category()
        .map(|c| c.display_name().to_string())
        .unwrap_or_else(|| "--".to_string());
    println!("  Category:   {}", category);
    if let Some(image) = game.featured_image() {
        println!(
            "  Image:      {}",
            image
                .sized_url(1200, 675)
                .if_supports_color(Stdout, |t| t.cyan()),
        );
    }

    if let Some(description) = game.description() {
        println!();
        println!("{}", description);
    }

    if let Some(instructions) = game.instructions() {
        println!();
        println!("{}", "How to Play".if_supports_color(Stdout, |t| t.bold()));
        println!("{}", instructions);
    }

    if let Some(content) = game.content.as_deref() {
        println!();
        println!("{}", content);
    }
}
