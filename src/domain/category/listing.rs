use super::entity::BlogCategory;
use crate::domain::errors::DomainError;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategorySortField {
    #[default]
    Name,
    Slug,
    PostCount,
    CreatedAt,
    UpdatedAt,
}

impl CategorySortField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Slug,
        Self::PostCount,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Slug => "slug",
            Self::PostCount => "post_count",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

impl fmt::Display for CategorySortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategorySortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown sort field '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(DomainError::Validation(format!(
                "unknown sort direction '{other}'"
            ))),
        }
    }
}

/// A normalized listing request. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListQuery {
    pub page: u32,
    pub page_size: u32,
    pub sort: CategorySortField,
    pub direction: SortDirection,
    pub search: Option<String>,
}

impl CategoryListQuery {
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }
}

#[derive(Debug, Clone)]
pub struct CategoryPage {
    pub items: Vec<BlogCategory>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_parses_known_columns_only() {
        for field in CategorySortField::ALL {
            assert_eq!(field.as_str().parse::<CategorySortField>().unwrap(), field);
        }
        assert!("id; drop table".parse::<CategorySortField>().is_err());
    }

    #[test]
    fn offset_is_zero_based() {
        let query = CategoryListQuery {
            page: 3,
            page_size: 25,
            sort: CategorySortField::Name,
            direction: SortDirection::Asc,
            search: None,
        };
        assert_eq!(query.offset(), 50);
        assert_eq!(SortDirection::Asc.reversed(), SortDirection::Desc);
    }
}
