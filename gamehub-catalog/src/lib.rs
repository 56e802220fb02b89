pub mod catalog;
pub mod client;
pub mod credentials;
pub mod error;
pub mod query;
pub mod types;

pub use catalog::Catalog;
pub use client::CosmicClient;
pub use credentials::{
    CredentialSource, CredentialSources, Credentials, config_path, credential_sources,
    save_to_file,
};
pub use error::{CosmicError, FetchError};
pub use query::ObjectQuery;
pub use types::{
    Category, CategoryMetadata, Difficulty, DifficultyKey, DifficultyParseError, FeaturedImage,
    Game, GameMetadata, ObjectsPage,
};
