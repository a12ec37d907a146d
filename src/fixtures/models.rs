use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub username: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default = "approved_by_default")]
    pub is_approved: bool,
    #[serde(default)]
    pub is_admin: bool,
}

fn approved_by_default() -> bool {
    true
}

/// A member household.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub members: Vec<Member>,
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: Vec<PhoneNumber>,
    #[serde(default)]
    pub honorary: bool,
    pub member_since: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub number: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressType {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_type: AddressType,
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPost {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    /// Older fixture files call this field `content`.
    #[serde(alias = "content")]
    pub post: String,
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
}

/// Calendar entry. Single-instant events (`date` in older fixtures) carry
/// only a `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "date")]
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub location: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    pub thumbnail: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    pub uploaded_by: String,
    pub created_at: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub carousel: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Pending,
    Approved,
    Rejected,
}

impl From<bool> for PostStatus {
    fn from(approved: bool) -> Self {
        if approved {
            PostStatus::Approved
        } else {
            PostStatus::Pending
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAuthor {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
}

/// Bulletin board post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "BulletinPostRecord")]
pub struct BulletinPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub body: String,
    pub user: PostAuthor,
    pub created_at: String,
    pub updated_at: String,
    pub status: PostStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Accepts either moderation representation found in fixture files: a
/// `status` string or a boolean `isApproved`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BulletinPostRecord {
    #[serde(rename = "_id", alias = "id")]
    id: String,
    title: String,
    body: String,
    user: PostAuthor,
    created_at: String,
    updated_at: String,
    #[serde(default)]
    status: Option<PostStatus>,
    #[serde(default)]
    is_approved: Option<bool>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
}

impl From<BulletinPostRecord> for BulletinPost {
    fn from(record: BulletinPostRecord) -> Self {
        let status = record
            .status
            .or_else(|| record.is_approved.map(PostStatus::from))
            .unwrap_or(PostStatus::Pending);

        Self {
            id: record.id,
            title: record.title,
            body: record.body,
            user: record.user,
            created_at: record.created_at,
            updated_at: record.updated_at,
            status,
            image: record.image,
            thumbnail: record.thumbnail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn news_content_field_loads_as_post() {
        let news: NewsPost = serde_json::from_value(json!({
            "_id": "9",
            "title": "Old shape",
            "content": "body text",
            "author": "Admin User",
            "createdAt": "2024-11-15T12:00:00Z",
            "updatedAt": "2024-11-15T12:00:00Z",
            "isPublished": true
        }))
        .unwrap();

        assert_eq!(news.post, "body text");
        let out = serde_json::to_value(&news).unwrap();
        assert_eq!(out["post"], "body text");
        assert!(out.get("content").is_none());
        assert!(out.get("image").is_none());
    }

    #[test]
    fn event_date_loads_as_start() {
        let event: Event = serde_json::from_value(json!({
            "id": "4",
            "title": "Race",
            "date": "2025-01-15T09:00:00Z",
            "location": "Main Slope",
            "createdAt": "2024-11-01T12:00:00Z",
            "updatedAt": "2024-11-01T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(event.id, "4");
        assert_eq!(event.start, "2025-01-15T09:00:00Z");
        assert!(event.end.is_none());
        assert!(!event.all_day);
    }

    #[test]
    fn bulletin_is_approved_maps_to_status() {
        let base = json!({
            "_id": "1",
            "title": "t",
            "body": "<p>b</p>",
            "user": { "_id": "u1", "name": "Regular User" },
            "createdAt": "2025-03-20T14:30:00Z",
            "updatedAt": "2025-03-20T14:30:00Z"
        });

        let mut approved = base.clone();
        approved["isApproved"] = json!(true);
        let post: BulletinPost = serde_json::from_value(approved).unwrap();
        assert_eq!(post.status, PostStatus::Approved);

        let mut unapproved = base.clone();
        unapproved["isApproved"] = json!(false);
        let post: BulletinPost = serde_json::from_value(unapproved).unwrap();
        assert_eq!(post.status, PostStatus::Pending);

        let mut rejected = base;
        rejected["status"] = json!("rejected");
        rejected["isApproved"] = json!(true);
        let post: BulletinPost = serde_json::from_value(rejected).unwrap();
        assert_eq!(post.status, PostStatus::Rejected);
    }

    #[test]
    fn bulletin_post_serializes_status_not_flag() {
        let post = BulletinPost {
            id: "1".into(),
            title: "t".into(),
            body: "b".into(),
            user: PostAuthor {
                id: "u1".into(),
                name: "Admin User".into(),
            },
            created_at: "2025-03-20T14:30:00Z".into(),
            updated_at: "2025-03-20T14:30:00Z".into(),
            status: PostStatus::Approved,
            image: None,
            thumbnail: None,
        };

        let out = serde_json::to_value(&post).unwrap();
        assert_eq!(out["_id"], "1");
        assert_eq!(out["status"], "approved");
        assert_eq!(out["user"]["_id"], "u1");
        assert!(out.get("isApproved").is_none());
    }
}
