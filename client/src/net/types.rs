//! Wire DTOs for the remote blog API.
//!
//! DESIGN
//! ======
//! Field names mirror the API's JSON (`_id`, `authorId`, `userId`) through
//! serde renames so the rest of the crate can use snake_case. List payloads
//! are decoded leniently; a blog missing optional fields still renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A blog post as returned by `GET /blogs/getBlogsSearch`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    /// Document identifier assigned by the API.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Identifier of the user who wrote the post.
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_id: String,
    /// Category label as stored by the API. Kept as text so categories the
    /// client does not know about still display.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Fixed set of blog categories offered by the filter and edit selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Sports,
    Nature,
    Technology,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Sports, Self::Nature, Self::Technology];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sports => "Sports",
            Self::Nature => "Nature",
            Self::Technology => "Technology",
        }
    }

    /// Parse the exact label used on the wire.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }

    /// Whether this option is the one `current` names.
    #[must_use]
    pub fn is_selected(self, current: &str) -> bool {
        self.as_str() == current
    }
}

/// Account role chosen at signup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Author,
    Customer,
}

impl Role {
    pub const ALL: [Self; 2] = [Self::Author, Self::Customer];

    /// Wire value, also used as the `<option>` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Customer => "customer",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Author => "Author",
            Self::Customer => "Customer",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }
}

/// Body of `POST /users/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

/// Body of `POST /users/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub password: String,
    pub role: Role,
}

/// Successful `POST /users/login` payload. Both fields are optional on the
/// wire so a malformed success can be reported instead of failing decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Envelope of `GET /blogs/getBlogsSearch`. Entries stay raw so one
/// undecodable blog does not hide the rest.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BlogListResponse {
    #[serde(default)]
    pub data: Option<Vec<serde_json::Value>>,
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `PATCH /blogs/updateBlog/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogUpdate {
    pub content: String,
    pub title: String,
    pub category: String,
}

/// Error payload the API returns alongside non-2xx statuses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Search filters for the listing endpoint. Empty fields are omitted from
/// the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogQuery {
    pub search: String,
    pub category: String,
}

impl BlogQuery {
    #[must_use]
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        Self { search: search.into(), category: category.into() }
    }

    /// Non-empty `(name, value)` pairs in the order the API expects.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if !self.search.is_empty() {
            pairs.push(("search", self.search.as_str()));
        }
        if !self.category.is_empty() {
            pairs.push(("category", self.category.as_str()));
        }
        pairs
    }
}
