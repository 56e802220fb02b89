use std::cmp::Ordering;

use crate::client::CosmicClient;
use crate::error::FetchError;
use crate::query::ObjectQuery;
use crate::types::{Category, DifficultyKey, Game};

/// Properties requested for listing queries.
const GAME_PROPS: &[&str] = &["id", "title", "slug", "metadata"];
/// Listing props plus the body content, for single-game fetches.
const GAME_DETAIL_PROPS: &[&str] = &["id", "title", "slug", "metadata", "content"];
const CATEGORY_PROPS: &[&str] = &["id", "title", "slug", "metadata"];

/// Read operations over the games catalog.
///
/// Each operation issues exactly one request and normalizes the result:
/// a remote not-found collapses to an empty list (or `None`), anything
/// else surfaces as an operation-labeled [`FetchError`] with the cause
/// attached.
pub struct Catalog {
    client: CosmicClient,
}

impl Catalog {
    pub fn new(client: CosmicClient) -> Self {
        Self { client }
    }

    /// All games, popular ones first, then alphabetical by title.
    pub async fn games(&self) -> Result<Vec<Game>, FetchError> {
        let query = ObjectQuery::new("games").props(GAME_PROPS).depth(1);
        match self.client.find::<Game>(query).await {
            Ok(page) => {
                let mut games = page.objects;
                sort_games(&mut games);
                Ok(games)
            }
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            Err(e) => Err(FetchError::new("games", e)),
        }
    }

    /// Games belonging to the category with the given slug.
    pub async fn games_by_category(&self, category_slug: &str) -> Result<Vec<Game>, FetchError> {
        let query = ObjectQuery::new("games")
            .filter("metadata.category.slug", category_slug)
            .props(GAME_PROPS)
            .depth(1);
        match self.client.find::<Game>(query).await {
            Ok(page) => Ok(page.objects),
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            Err(e) => Err(FetchError::new("games by category", e)),
        }
    }

    /// A single game by slug, or `None` when it doesn't exist.
    ///
    /// An object that exists but has no metadata section also reads as
    /// `None`; there is nothing renderable behind it.
    pub async fn game(&self, slug: &str) -> Result<Option<Game>, FetchError> {
        let query = ObjectQuery::new("games")
            .filter("slug", slug)
            .props(GAME_DETAIL_PROPS)
            .depth(1);
        match self.client.find_one::<Game>(query).await {
            Ok(game) if game.metadata.is_none() => Ok(None),
            Ok(game) => Ok(Some(game)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(FetchError::new("game", e)),
        }
    }

    /// All categories, in the store's order.
    pub async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        let query = ObjectQuery::new("categories").props(CATEGORY_PROPS);
        match self.client.find::<Category>(query).await {
            Ok(page) => Ok(page.objects),
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            Err(e) => Err(FetchError::new("categories", e)),
        }
    }

    /// Games flagged as popular.
    pub async fn popular_games(&self) -> Result<Vec<Game>, FetchError> {
        let query = ObjectQuery::new("games")
            .filter("metadata.is_popular", true)
            .props(GAME_PROPS)
            .depth(1);
        match self.client.find::<Game>(query).await {
            Ok(page) => Ok(page.objects),
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            Err(e) => Err(FetchError::new("popular games", e)),
        }
    }

    /// Games with the given difficulty key.
    pub async fn games_by_difficulty(&self, key: DifficultyKey) -> Result<Vec<Game>, FetchError> {
        let query = ObjectQuery::new("games")
            .filter("metadata.difficulty.key", key.key_name())
            .props(GAME_PROPS)
            .depth(1);
        match self.client.find::<Game>(query).await {
            Ok(page) => Ok(page.objects),
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            Err(e) => Err(FetchError::new("games by difficulty", e)),
        }
    }
}

/// Sort popular games ahead of the rest, alphabetical by title within
/// each group. The sort is stable, so games equal under both phases keep
/// whatever order the store returned them in.
fn sort_games(games: &mut [Game]) {
    games.sort_by(compare_games);
}

fn compare_games(a: &Game, b: &Game) -> Ordering {
    // Popularity only decides when the two flags differ
    match (a.is_popular(), b.is_popular()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => compare_titles(&a.title, &b.title),
    }
}

/// Case-folded title comparison with a raw tiebreak, so "ace" sorts
/// ahead of "Zebra" while the order stays total.
fn compare_titles(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => a.cmp(b),
        unequal => unequal,
    }
}
