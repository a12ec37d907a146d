// Per-route response computation. Nothing here sleeps; latency is the
// simulator's job.
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Map, Value};

use super::call::{Payload, Verb};
use super::route::Endpoint;
use super::simulator::WriteMode;
use crate::error::ApiError;
use crate::store::{Resource, Store, ID_FIELD};

const LATEST_LIMIT: usize = 3;
const IMAGE_PLACEHOLDER: &str = "/images/placeholder.jpg";
const PDF_PLACEHOLDER: &str = "/pdfs/placeholder.pdf";
const UNIT_IMAGE_PLACEHOLDER: &str = "/images/members/placeholder.jpg";
const UNIT_THUMBNAIL_PLACEHOLDER: &str = "/images/members/placeholder-thumb.jpg";

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn generate_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

fn fields(payload: Option<&Payload>) -> Map<String, Value> {
    payload.map(Payload::fields).unwrap_or_default()
}

/// Shallow merge: top-level keys of `patch` replace those of `base`.
pub(crate) fn merge(base: &Value, patch: Map<String, Value>) -> Value {
    let mut merged = match base {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    merged.extend(patch);
    Value::Object(merged)
}

fn message(text: &str) -> Value {
    json!({ "message": text })
}

fn first_matching(records: Vec<Value>, keep: impl Fn(&Value) -> bool) -> Value {
    Value::Array(records.into_iter().filter(|r| keep(r)).take(LATEST_LIMIT).collect())
}

fn flag(record: &Value, key: &str) -> bool {
    record.get(key).and_then(Value::as_bool).unwrap_or(false)
}

pub(crate) async fn endpoint(
    store: &dyn Store,
    endpoint: Endpoint,
    payload: Option<&Payload>,
) -> Result<Value, ApiError> {
    if let Some(files) = payload.map(Payload::file_count).filter(|n| *n > 0) {
        tracing::debug!("{:?} received {} file part(s); contents ignored", endpoint, files);
    }

    let data = match endpoint {
        Endpoint::Auth => return authenticate(store, payload).await,
        Endpoint::Profile => merge(&store.current_user().await, fields(payload)),
        Endpoint::Logout => message("Logged out successfully"),
        Endpoint::ForgotUsername => {
            message("If your email is registered, you will receive your username shortly.")
        }
        Endpoint::ForgotPassword => message(
            "If your email is registered, you will receive a password reset link shortly.",
        ),
        Endpoint::AllNews => Value::Array(store.list(Resource::News).await),
        Endpoint::LatestNews => {
            first_matching(store.list(Resource::News).await, |n| flag(n, "isPublished"))
        }
        Endpoint::NewsImageUpload => json!({ "url": IMAGE_PLACEHOLDER }),
        Endpoint::NewsPdfUpload => json!({ "url": PDF_PLACEHOLDER }),
        Endpoint::UnitImageUpload => json!({
            "image": UNIT_IMAGE_PLACEHOLDER,
            "thumbnail": UNIT_THUMBNAIL_PLACEHOLDER,
        }),
        Endpoint::LatestPosts => first_matching(store.list(Resource::Posts).await, |p| {
            p.get("status").and_then(Value::as_str) == Some("approved")
        }),
        Endpoint::CarouselImages => Value::Array(
            store
                .list(Resource::Images)
                .await
                .into_iter()
                .filter(|i| flag(i, "isPublished") && flag(i, "carousel"))
                .collect(),
        ),
        Endpoint::ImageTags => image_tags(store.list(Resource::Images).await),
    };

    Ok(data)
}

/// Any non-empty username and password pair logs in as the current user.
async fn authenticate(store: &dyn Store, payload: Option<&Payload>) -> Result<Value, ApiError> {
    let username = payload.and_then(|p| p.text("username"));
    let password = payload.and_then(|p| p.text("password"));

    match (username, password) {
        (Some(username), Some(_)) => {
            tracing::info!("Mock login accepted for {}", username);
            Ok(store.current_user().await)
        }
        _ => Err(ApiError::InvalidCredentials),
    }
}

fn image_tags(images: Vec<Value>) -> Value {
    let mut tags: Vec<Value> = Vec::new();
    for tag in images
        .iter()
        .filter_map(|i| i.get("tags").and_then(Value::as_array))
        .flatten()
    {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    Value::Array(tags)
}

/// The record a POST to `resource` fabricates from its payload.
pub(crate) fn created_record(resource: Resource, payload: Option<&Payload>) -> Value {
    let mut record = fields(payload);
    record.insert(ID_FIELD.to_string(), Value::String(generate_id()));

    match resource {
        Resource::Users => {
            record.remove("password");
        }
        Resource::News | Resource::Events | Resource::Posts => {
            record.insert("createdAt".to_string(), Value::String(timestamp()));
        }
        Resource::Images => {
            record.insert("url".to_string(), Value::String(IMAGE_PLACEHOLDER.to_string()));
        }
        Resource::Units => {}
    }

    Value::Object(record)
}

pub(crate) async fn collection(
    store: &dyn Store,
    resource: Resource,
    verb: Verb,
    payload: Option<&Payload>,
    write_mode: WriteMode,
) -> Result<Value, ApiError> {
    match verb {
        Verb::Get => Ok(Value::Array(store.list(resource).await)),
        Verb::Post => {
            let record = created_record(resource, payload);
            if write_mode == WriteMode::Apply {
                store.insert(resource, record.clone()).await;
            }
            Ok(record)
        }
        Verb::Put | Verb::Delete => Err(ApiError::MethodNotAllowed),
    }
}

pub(crate) async fn item(
    store: &dyn Store,
    resource: Option<Resource>,
    id: &str,
    verb: Verb,
    payload: Option<&Payload>,
    write_mode: WriteMode,
) -> Result<Value, ApiError> {
    let resource = resource.ok_or_else(|| ApiError::not_found("Entity not found"))?;
    let record = store
        .find(resource, id)
        .await
        .ok_or_else(|| ApiError::not_found("Item not found"))?;

    match verb {
        Verb::Get => Ok(record),
        Verb::Put => {
            let mut patch = fields(payload);
            patch.insert("updatedAt".to_string(), Value::String(timestamp()));
            let mut updated = merge(&record, patch);
            if write_mode == WriteMode::Apply {
                // The stored record stays keyed by its URL id.
                if let Value::Object(map) = &mut updated {
                    map.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
                }
                if !store.replace(resource, id, updated.clone()).await {
                    return Err(ApiError::not_found("Item not found"));
                }
            }
            Ok(updated)
        }
        Verb::Delete => {
            if write_mode == WriteMode::Apply && !store.remove(resource, id).await {
                return Err(ApiError::not_found("Item not found"));
            }
            Ok(json!({ "success": true, "message": "Item deleted successfully" }))
        }
        Verb::Post => Err(ApiError::MethodNotAllowed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::call::FormData;
    use crate::fixtures::Fixtures;
    use crate::store::MemoryStore;

    fn store() -> MemoryStore {
        MemoryStore::from_fixtures(Fixtures::seed()).unwrap()
    }

    #[test]
    fn merge_overrides_and_keeps() {
        let base = json!({ "_id": "1", "title": "Old", "location": "Lodge" });
        let patch = json!({ "title": "New", "allDay": true });
        let merged = merge(&base, Payload::Json(patch).fields());
        assert_eq!(
            merged,
            json!({ "_id": "1", "title": "New", "location": "Lodge", "allDay": true })
        );
    }

    #[test]
    fn merge_is_shallow() {
        let base = json!({ "user": { "_id": "u1", "name": "Admin User" } });
        let merged = merge(&base, Payload::Json(json!({ "user": { "name": "X" } })).fields());
        assert_eq!(merged["user"], json!({ "name": "X" }));
    }

    #[test]
    fn created_user_drops_password() {
        let payload = Payload::Json(json!({ "username": "new", "password": "secret" }));
        let record = created_record(Resource::Users, Some(&payload));
        assert_eq!(record["username"], "new");
        assert!(record.get("password").is_none());
        assert!(record[ID_FIELD].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[test]
    fn created_news_is_stamped() {
        let payload = Payload::Json(json!({ "title": "Fresh" }));
        let record = created_record(Resource::News, Some(&payload));
        assert!(record["createdAt"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn created_image_gets_placeholder_url() {
        let mut form = FormData::default();
        form.fields.insert("title".into(), "Upload".into());
        let record = created_record(Resource::Images, Some(&Payload::Form(form)));
        assert_eq!(record["url"], IMAGE_PLACEHOLDER);
        assert_eq!(record["title"], "Upload");
    }

    #[test]
    fn created_ids_differ() {
        let a = created_record(Resource::Units, None);
        let b = created_record(Resource::Units, None);
        assert_ne!(a[ID_FIELD], b[ID_FIELD]);
    }

    #[tokio::test]
    async fn latest_posts_skip_unapproved() {
        let data = endpoint(&store(), Endpoint::LatestPosts, None).await.unwrap();
        let ids: Vec<_> = data
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p[ID_FIELD].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["1", "2", "4"]);
    }

    #[tokio::test]
    async fn carousel_only_flagged_images() {
        let data = endpoint(&store(), Endpoint::CarouselImages, None).await.unwrap();
        let images = data.as_array().unwrap();
        assert_eq!(images.len(), 3);
        assert!(images.iter().all(|i| i["carousel"] == true));
    }

    #[tokio::test]
    async fn image_tags_are_distinct_in_order() {
        let data = endpoint(&store(), Endpoint::ImageTags, None).await.unwrap();
        let tags = data.as_array().unwrap();
        assert_eq!(tags[0], "winter");
        assert_eq!(tags[1], "powder");
        assert_eq!(tags[2], "lodge");
        assert_eq!(tags.iter().filter(|t| *t == "winter").count(), 1);
    }

    #[tokio::test]
    async fn profile_merges_into_current_user() {
        let payload = Payload::Json(json!({ "email": "new@example.com" }));
        let data = endpoint(&store(), Endpoint::Profile, Some(&payload)).await.unwrap();
        assert_eq!(data["email"], "new@example.com");
        assert_eq!(data["username"], "admin");
    }

    #[tokio::test]
    async fn auth_accepts_form_fields() {
        let mut form = FormData::default();
        form.fields.insert("username".into(), "someone".into());
        form.fields.insert("password".into(), "anything".into());
        let data = endpoint(&store(), Endpoint::Auth, Some(&Payload::Form(form)))
            .await
            .unwrap();
        assert_eq!(data["username"], "admin");
    }

    #[tokio::test]
    async fn auth_without_payload_is_rejected() {
        let err = endpoint(&store(), Endpoint::Auth, None).await.unwrap_err();
        assert_eq!(err, ApiError::InvalidCredentials);
    }

    #[tokio::test]
    async fn item_distinguishes_missing_collection_and_record() {
        let store = store();
        let err = item(&store, None, "1", Verb::Get, None, WriteMode::Discard)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::not_found("Entity not found"));

        let err = item(&store, Some(Resource::News), "99", Verb::Get, None, WriteMode::Discard)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::not_found("Item not found"));
    }

    #[tokio::test]
    async fn item_post_is_not_allowed() {
        let err = item(&store(), Some(Resource::News), "1", Verb::Post, None, WriteMode::Discard)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::MethodNotAllowed);
    }

    /// Finds every record but loses it before any write lands, as when a
    /// concurrent delete runs between the lookup and the write.
    struct VanishingStore;

    #[async_trait::async_trait]
    impl Store for VanishingStore {
        async fn list(&self, _resource: Resource) -> Vec<Value> {
            Vec::new()
        }

        async fn find(&self, _resource: Resource, id: &str) -> Option<Value> {
            Some(json!({ "_id": id, "title": "Here a moment ago" }))
        }

        async fn insert(&self, _resource: Resource, _record: Value) {}

        async fn replace(&self, _resource: Resource, _id: &str, _record: Value) -> bool {
            false
        }

        async fn remove(&self, _resource: Resource, _id: &str) -> bool {
            false
        }

        async fn current_user(&self) -> Value {
            Value::Null
        }
    }

    #[tokio::test]
    async fn applied_write_to_vanished_record_is_not_found() {
        let payload = Payload::Json(json!({ "title": "Too late" }));
        let put = item(
            &VanishingStore,
            Some(Resource::News),
            "1",
            Verb::Put,
            Some(&payload),
            WriteMode::Apply,
        )
        .await;
        assert_eq!(put.unwrap_err(), ApiError::not_found("Item not found"));

        let delete = item(
            &VanishingStore,
            Some(Resource::News),
            "1",
            Verb::Delete,
            None,
            WriteMode::Apply,
        )
        .await;
        assert_eq!(delete.unwrap_err(), ApiError::not_found("Item not found"));

        // Discard mode never writes, so it still answers
        let echoed = item(
            &VanishingStore,
            Some(Resource::News),
            "1",
            Verb::Put,
            Some(&payload),
            WriteMode::Discard,
        )
        .await
        .unwrap();
        assert_eq!(echoed["title"], "Too late");
    }

    #[tokio::test]
    async fn applied_update_keeps_url_id() {
        let store = store();
        let payload = Payload::Json(json!({ "_id": "2", "title": "X" }));
        let updated = item(
            &store,
            Some(Resource::News),
            "1",
            Verb::Put,
            Some(&payload),
            WriteMode::Apply,
        )
        .await
        .unwrap();
        assert_eq!(updated[ID_FIELD], "1");

        assert_eq!(store.find(Resource::News, "1").await.unwrap()["title"], "X");
        assert_ne!(store.find(Resource::News, "2").await.unwrap()["title"], "X");
    }

    #[tokio::test]
    async fn collection_put_is_not_allowed() {
        let err = collection(&store(), Resource::Units, Verb::Put, None, WriteMode::Discard)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::MethodNotAllowed);
    }
}
