pub mod models;
mod seed;

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use models::{BulletinPost, Event, Image, NewsPost, Unit, User};

/// The complete demo dataset handed to the store at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixtures {
    pub users: Vec<User>,
    /// The account every successful mock login resolves to.
    pub current_user: User,
    pub news: Vec<NewsPost>,
    pub events: Vec<Event>,
    pub units: Vec<Unit>,
    pub images: Vec<Image>,
    pub posts: Vec<BulletinPost>,
}

impl Fixtures {
    /// Built-in ski club dataset.
    pub fn seed() -> Self {
        Self {
            users: seed::users(),
            current_user: seed::current_user(),
            news: seed::news(),
            events: seed::events(),
            units: seed::units(),
            images: seed::images(),
            posts: seed::posts(),
        }
    }

    /// Load a dataset from a JSON fixture file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading fixture file {}", path.display()))?;
        let fixtures = serde_json::from_str(&content)
            .with_context(|| format!("parsing fixture file {}", path.display()))?;
        Ok(fixtures)
    }
}
