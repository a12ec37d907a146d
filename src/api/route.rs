//! Path resolution for logical calls.
//!
//! Precedence, first match wins:
//! 1. a fixed endpoint path,
//! 2. `<base>/<id>` for an identifier-scoped record,
//! 3. a registered collection base path,
//! 4. nothing (the caller applies its unknown-route policy).

use crate::store::Resource;

/// Single-purpose paths answered regardless of verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Auth,
    Profile,
    Logout,
    ForgotUsername,
    ForgotPassword,
    AllNews,
    LatestNews,
    NewsImageUpload,
    NewsPdfUpload,
    LatestPosts,
    CarouselImages,
    ImageTags,
    UnitImageUpload,
}

impl Endpoint {
    pub const ALL: [Endpoint; 13] = [
        Endpoint::Auth,
        Endpoint::Profile,
        Endpoint::Logout,
        Endpoint::ForgotUsername,
        Endpoint::ForgotPassword,
        Endpoint::AllNews,
        Endpoint::LatestNews,
        Endpoint::NewsImageUpload,
        Endpoint::NewsPdfUpload,
        Endpoint::LatestPosts,
        Endpoint::CarouselImages,
        Endpoint::ImageTags,
        Endpoint::UnitImageUpload,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Auth => "/api/users/auth",
            Endpoint::Profile => "/api/users/profile",
            Endpoint::Logout => "/api/users/logout",
            Endpoint::ForgotUsername => "/api/users/forgot-username",
            Endpoint::ForgotPassword => "/api/users/forgot-password",
            Endpoint::AllNews => "/api/news/all",
            Endpoint::LatestNews => "/api/news/latest",
            Endpoint::NewsImageUpload => "/api/news/upload-image",
            Endpoint::NewsPdfUpload => "/api/news/upload-pdf",
            Endpoint::LatestPosts => "/api/posts/latest",
            Endpoint::CarouselImages => "/api/images/carousel",
            Endpoint::ImageTags => "/api/images/tags",
            Endpoint::UnitImageUpload => "/api/unit/u",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.path() == path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Endpoint(Endpoint),
    /// `resource` is `None` when nothing is registered under the base path.
    Item {
        resource: Option<Resource>,
        id: &'a str,
    },
    Collection(Resource),
    Unhandled,
}

/// Query string and trailing slash play no part in routing.
pub fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

/// Split `/api/<resource>/<id>` into base path and identifier. Paths with
/// fewer than three segments never carry an identifier.
fn split_identifier(path: &str) -> Option<(&str, &str)> {
    let segments = path.trim_start_matches('/').split('/').count();
    if segments < 3 {
        return None;
    }
    let (base, id) = path.rsplit_once('/')?;
    (!id.is_empty()).then_some((base, id))
}

pub fn resolve(path: &str) -> Route<'_> {
    let path = normalize(path);

    if let Some(endpoint) = Endpoint::from_path(path) {
        return Route::Endpoint(endpoint);
    }

    if let Some((base, id)) = split_identifier(path) {
        return Route::Item {
            resource: Resource::from_base_path(base),
            id,
        };
    }

    match Resource::from_base_path(path) {
        Some(resource) => Route::Collection(resource),
        None => Route::Unhandled,
    }
}
