// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

/// Resource name shared by every blog category capability.
pub const BLOG_CATEGORY_RESOURCE: &str = "blog-category";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// A named permission. The textual form is `action:resource`, for example
/// `view:blog-category`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub action: String,
    pub resource: String,
}

impl Capability {
    pub fn new(action: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            resource: resource.into(),
        }
    }

    pub fn view_blog_category() -> Self {
        Self::new("view", BLOG_CATEGORY_RESOURCE)
    }

    pub fn matches(&self, other: &Self) -> bool {
        self.action == other.action && self.resource == other.resource
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.action, self.resource)
    }
}

impl FromStr for Capability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (action, resource) = s
            .split_once(':')
            .ok_or_else(|| DomainError::Validation(format!("invalid capability '{s}'")))?;
        let action = action.trim();
        let resource = resource.trim();
        if action.is_empty() || resource.is_empty() {
            return Err(DomainError::Validation(format!("invalid capability '{s}'")));
        }
        Ok(Self::new(action, resource))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    #[default]
    Author,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Author => "author",
        }
    }

    pub fn default_capabilities(self) -> HashSet<Capability> {
        use Capability as Cap;
        match self {
            Self::Admin => HashSet::from([
                Cap::new("view", BLOG_CATEGORY_RESOURCE),
                Cap::new("create", BLOG_CATEGORY_RESOURCE),
                Cap::new("update", BLOG_CATEGORY_RESOURCE),
                Cap::new("delete", BLOG_CATEGORY_RESOURCE),
            ]),
            Self::Editor => HashSet::from([Cap::new("view", BLOG_CATEGORY_RESOURCE)]),
            Self::Author => HashSet::new(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "editor" => Ok(Self::Editor),
            "author" => Ok(Self::Author),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}
