use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A product category.
///
/// Also the update payload: `categoryId` in the body must equal the id in
/// the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Store-assigned identifier
    #[serde(default)]
    #[schema(example = 1)]
    pub category_id: i32,
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Electronics")]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 1000))]
    #[schema(example = "Explore the latest gadgets and electronic devices.")]
    pub description: String,
}

/// Payload for creating a category. A `categoryId` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Shoes")]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 1000))]
    #[schema(example = "Footwear")]
    pub description: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn into_category(self, category_id: i32) -> Category {
        Category {
            category_id,
            name: self.name,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_uses_camel_case_id() {
        let category = NewCategory::new("Fashion", "Clothing").into_category(2);
        let value = serde_json::to_value(&category).unwrap();

        assert_eq!(value, json!({"categoryId": 2, "name": "Fashion", "description": "Clothing"}));
    }

    #[test]
    fn test_new_category_ignores_body_id() {
        let input: NewCategory =
            serde_json::from_value(json!({"categoryId": 99, "name": "Shoes", "description": "Footwear"}))
                .unwrap();

        assert_eq!(input, NewCategory::new("Shoes", "Footwear"));
    }

    #[test]
    fn test_name_length_is_validated() {
        assert!(NewCategory::new("", "x").validate().is_err());
        assert!(NewCategory::new("a".repeat(101), "x").validate().is_err());
        assert!(NewCategory::new("a".repeat(100), "").validate().is_ok());
    }

    #[test]
    fn test_description_length_is_validated() {
        let category = Category {
            category_id: 1,
            name: "Books".to_string(),
            description: "d".repeat(1001),
        };
        assert!(category.validate().is_err());
    }
}
