// Store pattern - the only place fixture records live
use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::fixtures::Fixtures;

/// Key every record carries its identifier under.
pub const ID_FIELD: &str = "_id";

/// A fixture collection reachable under a base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Users,
    News,
    Events,
    Units,
    Images,
    Posts,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Users,
        Resource::News,
        Resource::Events,
        Resource::Units,
        Resource::Images,
        Resource::Posts,
    ];

    pub fn base_path(self) -> &'static str {
        match self {
            Resource::Users => "/api/users",
            Resource::News => "/api/news",
            Resource::Events => "/api/events",
            Resource::Units => "/api/unit",
            Resource::Images => "/api/images",
            Resource::Posts => "/api/posts",
        }
    }

    pub fn from_base_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.base_path() == path)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Users => "users",
            Resource::News => "news",
            Resource::Events => "events",
            Resource::Units => "units",
            Resource::Images => "images",
            Resource::Posts => "posts",
        };
        f.write_str(name)
    }
}

/// Store trait - every read and write the simulator makes
#[async_trait]
pub trait Store: Send + Sync {
    /// Every record of a collection, in fixture order
    async fn list(&self, resource: Resource) -> Vec<Value>;

    /// Record whose `_id` equals `id`
    async fn find(&self, resource: Resource, id: &str) -> Option<Value>;

    /// Append a record
    async fn insert(&self, resource: Resource, record: Value);

    /// Swap the record stored under `id`; false when there is none
    async fn replace(&self, resource: Resource, id: &str, record: Value) -> bool;

    /// Drop the record stored under `id`; false when there is none
    async fn remove(&self, resource: Resource, id: &str) -> bool;

    /// The account mock logins resolve to
    async fn current_user(&self) -> Value;
}

/// In-memory implementation. Lives for the process; nothing reaches disk.
pub struct MemoryStore {
    collections: RwLock<HashMap<Resource, Vec<Value>>>,
    current_user: Value,
}

impl MemoryStore {
    pub fn from_fixtures(fixtures: Fixtures) -> Result<Self, serde_json::Error> {
        let Fixtures {
            users,
            current_user,
            news,
            events,
            units,
            images,
            posts,
        } = fixtures;

        let mut collections = HashMap::new();
        collections.insert(Resource::Users, to_records(users)?);
        collections.insert(Resource::News, to_records(news)?);
        collections.insert(Resource::Events, to_records(events)?);
        collections.insert(Resource::Units, to_records(units)?);
        collections.insert(Resource::Images, to_records(images)?);
        collections.insert(Resource::Posts, to_records(posts)?);

        Ok(Self {
            collections: RwLock::new(collections),
            current_user: serde_json::to_value(current_user)?,
        })
    }
}

fn to_records<T: serde::Serialize>(items: Vec<T>) -> Result<Vec<Value>, serde_json::Error> {
    items.into_iter().map(serde_json::to_value).collect()
}

fn has_id(record: &Value, id: &str) -> bool {
    record.get(ID_FIELD).and_then(Value::as_str) == Some(id)
}

#[async_trait]
impl Store for MemoryStore {
    async fn list(&self, resource: Resource) -> Vec<Value> {
        let collections = self.collections.read().await;
        collections.get(&resource).cloned().unwrap_or_default()
    }

    async fn find(&self, resource: Resource, id: &str) -> Option<Value> {
        let collections = self.collections.read().await;
        collections
            .get(&resource)?
            .iter()
            .find(|record| has_id(record, id))
            .cloned()
    }

    async fn insert(&self, resource: Resource, record: Value) {
        let mut collections = self.collections.write().await;
        collections.entry(resource).or_default().push(record);
    }

    async fn replace(&self, resource: Resource, id: &str, record: Value) -> bool {
        let mut collections = self.collections.write().await;
        let Some(slot) = collections
            .get_mut(&resource)
            .and_then(|records| records.iter_mut().find(|r| has_id(r, id)))
        else {
            return false;
        };
        *slot = record;
        true
    }

    async fn remove(&self, resource: Resource, id: &str) -> bool {
        let mut collections = self.collections.write().await;
        let Some(records) = collections.get_mut(&resource) else {
            return false;
        };
        let before = records.len();
        records.retain(|r| !has_id(r, id));
        records.len() != before
    }

    async fn current_user(&self) -> Value {
        self.current_user.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> MemoryStore {
        MemoryStore::from_fixtures(Fixtures::seed()).unwrap()
    }

    #[test]
    fn base_paths_round_trip() {
        for resource in Resource::ALL {
            assert_eq!(Resource::from_base_path(resource.base_path()), Some(resource));
        }
        assert_eq!(Resource::from_base_path("/api/units"), None);
        assert_eq!(Resource::from_base_path("/api"), None);
    }

    #[tokio::test]
    async fn list_preserves_fixture_order() {
        let store = store();
        let news = store.list(Resource::News).await;
        let ids: Vec<_> = news.iter().map(|n| n[ID_FIELD].as_str().unwrap()).collect();
        let expected: Vec<_> = Fixtures::seed().news.into_iter().map(|n| n.id).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn find_matches_on_id() {
        let store = store();
        let unit = store
            .find(Resource::Units, "679946b7aa76f40b4d292abf")
            .await
            .unwrap();
        assert_eq!(unit["members"][0]["lastName"], "Miller");
        assert!(store.find(Resource::Units, "missing").await.is_none());
    }

    #[tokio::test]
    async fn insert_replace_remove() {
        let store = store();
        let count = store.list(Resource::Events).await.len();

        store
            .insert(Resource::Events, json!({ "_id": "new", "title": "Torchlight Parade" }))
            .await;
        assert_eq!(store.list(Resource::Events).await.len(), count + 1);

        assert!(
            store
                .replace(Resource::Events, "new", json!({ "_id": "new", "title": "Moved" }))
                .await
        );
        assert_eq!(store.find(Resource::Events, "new").await.unwrap()["title"], "Moved");
        assert!(!store.replace(Resource::Events, "ghost", json!({})).await);

        assert!(store.remove(Resource::Events, "new").await);
        assert!(!store.remove(Resource::Events, "new").await);
        assert_eq!(store.list(Resource::Events).await.len(), count);
    }

    #[tokio::test]
    async fn current_user_is_serialized_with_wire_keys() {
        let user = store().current_user().await;
        assert_eq!(user[ID_FIELD], "1");
        assert_eq!(user["isAdmin"], true);
    }
}
