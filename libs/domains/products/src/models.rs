use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A product listed under exactly one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub product_id: i32,
    /// Owning category
    #[schema(example = 1)]
    pub category_id: i32,
    #[schema(example = "Smartphone")]
    pub name: String,
    /// Price in cents
    #[schema(example = 49999)]
    pub price: i64,
    pub description: String,
    /// Free-form grouping inside the category (e.g. a color)
    #[schema(example = "Black")]
    pub sub_category: String,
    pub stock: i32,
    pub is_featured: bool,
    #[schema(example = "smartphone.jpg")]
    pub image_url: String,
}

/// Payload for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub category_id: i32,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Price in cents
    #[validate(range(min = 0))]
    pub price: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub stock: i32,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub image_url: String,
}

impl NewProduct {
    pub fn new(category_id: i32, name: impl Into<String>, price: i64) -> Self {
        Self {
            category_id,
            name: name.into(),
            price,
            description: String::new(),
            sub_category: String::new(),
            stock: 0,
            is_featured: false,
            image_url: String::new(),
        }
    }

    /// Builds the stored product once an id has been assigned.
    pub fn into_product(self, product_id: i32) -> Product {
        Product {
            product_id,
            category_id: self.category_id,
            name: self.name,
            price: self.price,
            description: self.description,
            sub_category: self.sub_category,
            stock: self.stock,
            is_featured: self.is_featured,
            image_url: self.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_serializes_camel_case() {
        let product = NewProduct::new(3, "Blender", 5950).into_product(7);
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["productId"], 7);
        assert_eq!(value["categoryId"], 3);
        assert_eq!(value["price"], 5950);
        assert_eq!(value["isFeatured"], false);
        assert!(value.get("product_id").is_none());
    }

    #[test]
    fn test_new_product_defaults_optional_fields() {
        let input: NewProduct = serde_json::from_value(json!({
            "categoryId": 1,
            "name": "Cable",
            "price": 999
        }))
        .unwrap();

        assert_eq!(input.stock, 0);
        assert!(input.image_url.is_empty());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_fractional_price_is_rejected() {
        let result: Result<NewProduct, _> = serde_json::from_value(json!({
            "categoryId": 1,
            "name": "Cable",
            "price": 9.99
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_new_product_rejects_negative_price() {
        let input = NewProduct::new(1, "Broken", -1);
        assert!(input.validate().is_err());
    }
}
