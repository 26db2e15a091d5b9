//! Content categories.
//!
//! Category is a closed enum: every branch that selects a collection or an
//! upload directory matches exhaustively, and unrecognized input fails at
//! parse time with a `ValidationError` instead of falling through.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::ValidationError;

/// The content categories served by the API. The `services` and `users`
/// collections exist in the database schema but have no endpoint, so they are
/// deliberately not representable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Products,
    Articles,
    Qna,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Products, Category::Articles, Category::Qna];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Products => "products",
            Category::Articles => "articles",
            Category::Qna => "qna",
        }
    }

    /// Database table backing this category's collection. Only ever built
    /// from this closed enum, never from request input.
    pub fn table_name(&self) -> &'static str {
        self.as_str()
    }

    /// Subdirectory under the upload root where this category's files live.
    pub fn upload_dir(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "products" => Ok(Category::Products),
            "articles" => Ok(Category::Articles),
            "qna" => Ok(Category::Qna),
            other => Err(ValidationError::UnsupportedCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        assert_eq!("products".parse::<Category>().unwrap(), Category::Products);
        assert_eq!("articles".parse::<Category>().unwrap(), Category::Articles);
        assert_eq!("qna".parse::<Category>().unwrap(), Category::Qna);
    }

    #[test]
    fn test_parse_unknown_category_fails() {
        let err = "gadgets".parse::<Category>().unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedCategory(ref c) if c == "gadgets"));
        // Case-sensitive, like the collection names themselves.
        assert!("Products".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for category in Category::ALL {
            assert_eq!(
                category.to_string().parse::<Category>().unwrap(),
                category
            );
        }
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&Category::Qna).unwrap();
        assert_eq!(json, "\"qna\"");
        let parsed: Category = serde_json::from_str("\"articles\"").unwrap();
        assert_eq!(parsed, Category::Articles);
    }
}
