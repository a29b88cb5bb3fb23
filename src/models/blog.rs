use serde::{Deserialize, Deserializer, Serialize};

use super::user::User;

/// A blog entry as served by `/api/blogs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub likes: u32,
    /// Populated object on list/create, bare id on update, absent on
    /// legacy entries. Use [`Blog::owner`] rather than matching on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,
}

/// Shape of the `user` field on a blog. Anything that is neither an id nor
/// an object carrying one lands in `Unknown`, so one odd entry never fails
/// the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Id(String),
    Full(OwnerDetails),
    Unknown(serde_json::Value),
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerDetails {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Normalized owner identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerRef {
    pub id: String,
}

impl UserRef {
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id),
            Self::Full(details) => Some(&details.id),
            Self::Unknown(_) => None,
        }
    }

    /// Ranks how much the reference tells us: unknown < bare id < full object.
    pub fn completeness(&self) -> u8 {
        match self {
            Self::Unknown(_) => 0,
            Self::Id(_) => 1,
            Self::Full(_) => 2,
        }
    }
}

impl Blog {
    pub fn owner(&self) -> Option<OwnerRef> {
        self.user
            .as_ref()
            .and_then(UserRef::id)
            .filter(|id| !id.is_empty())
            .map(|id| OwnerRef { id: id.to_string() })
    }

    /// Whether `user` is the blog's owner. No session means no ownership.
    pub fn is_owned_by(&self, user: Option<&User>) -> bool {
        match (self.owner(), user) {
            (Some(owner), Some(user)) => owner.id == user.id,
            _ => false,
        }
    }
}

/// Body of `POST /api/blogs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub url: String,
}

/// Body of `PUT /api/blogs/:id`; `user` is the bare owner id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogUpdate {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}
