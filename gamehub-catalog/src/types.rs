use serde::Deserialize;

/// Envelope for object-list responses from the `objects` endpoint.
#[derive(Debug, Deserialize)]
pub struct ObjectsPage<T> {
    pub objects: Vec<T>,
    pub total: u64,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
}

/// A game object. Base fields beyond id/slug/title are omitted by the
/// server when a property subset is requested, so they stay optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Game {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: Option<GameMetadata>,
    #[serde(rename = "type", default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub modified_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub featured_image: Option<FeaturedImage>,
    /// Parent category, inlined by value when the query asks for depth-1
    /// expansion. A snapshot, not a live reference.
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub is_popular: Option<bool>,
}

impl Game {
    /// Display title from metadata, falling back to the object title.
    pub fn display_title(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.title.as_deref())
            .unwrap_or(&self.title)
    }

    /// Popularity flag; absent metadata or an unset flag counts as false.
    pub fn is_popular(&self) -> bool {
        self.metadata
            .as_ref()
            .and_then(|m| m.is_popular)
            .unwrap_or(false)
    }

    pub fn description(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.description.as_deref())
    }

    /// "How to play" markup fragment, when the editor filled one in.
    pub fn instructions(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.instructions.as_deref())
    }

    pub fn difficulty(&self) -> Option<&Difficulty> {
        self.metadata.as_ref().and_then(|m| m.difficulty.as_ref())
    }

    pub fn featured_image(&self) -> Option<&FeaturedImage> {
        self.metadata
            .as_ref()
            .and_then(|m| m.featured_image.as_ref())
    }

    pub fn category(&self) -> Option<&Category> {
        self.metadata.as_ref().and_then(|m| m.category.as_ref())
    }
}

/// A category object.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: Option<CategoryMetadata>,
    #[serde(rename = "type", default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub modified_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Category {
    /// Display name from metadata, falling back to the object title.
    pub fn display_name(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.name.as_deref())
            .unwrap_or(&self.title)
    }

    /// Icon glyph, falling back to a generic controller.
    pub fn icon(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.icon.as_deref())
            .unwrap_or("\u{1F3AE}")
    }

    pub fn description(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.description.as_deref())
    }
}

/// Difficulty descriptor: a key from the closed set plus the
/// human-readable label the editor chose for it.
#[derive(Debug, Clone, Deserialize)]
pub struct Difficulty {
    pub key: DifficultyKey,
    pub value: String,
}

/// The closed set of difficulty keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyKey {
    Easy,
    Medium,
    Hard,
}

const ALL_KEYS: &[DifficultyKey] = &[
    DifficultyKey::Easy,
    DifficultyKey::Medium,
    DifficultyKey::Hard,
];

impl DifficultyKey {
    /// Canonical key as stored in the content schema.
    pub fn key_name(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Capitalized form for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// All difficulty keys.
    pub fn all() -> &'static [DifficultyKey] {
        ALL_KEYS
    }
}

impl std::fmt::Display for DifficultyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key_name())
    }
}

/// Error returned when a string cannot be parsed into a `DifficultyKey`.
#[derive(Debug, Clone)]
pub struct DifficultyParseError(pub String);

impl std::fmt::Display for DifficultyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown difficulty: '{}'", self.0)
    }
}

impl std::error::Error for DifficultyParseError {}

impl std::str::FromStr for DifficultyKey {
    type Err = DifficultyParseError;

    /// Parse a difficulty key (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        for &key in ALL_KEYS {
            if key.key_name() == lower {
                return Ok(key);
            }
        }
        Err(DifficultyParseError(s.to_string()))
    }
}

/// Featured image pair: the raw upload URL and its imgix-served variant.
#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedImage {
    pub url: String,
    pub imgix_url: String,
}

impl FeaturedImage {
    /// Imgix URL cropped to `width`x`height` with automatic format and
    /// compression, as the site's image tags request it.
    pub fn sized_url(&self, width: u32, height: u32) -> String {
        format!(
            "{}?w={}&h={}&fit=crop&auto=format,compress",
            self.imgix_url, width, height
        )
    }
}
