use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{NewProduct, Product};

/// Sea-ORM entity for the `products` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub product_id: i32,
    pub category_id: i32,
    pub name: String,
    pub price: i64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub sub_category: String,
    pub stock: i32,
    pub is_featured: bool,
    pub image_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            product_id: model.product_id,
            category_id: model.category_id,
            name: model.name,
            price: model.price,
            description: model.description,
            sub_category: model.sub_category,
            stock: model.stock,
            is_featured: model.is_featured,
            image_url: model.image_url,
        }
    }
}

impl From<NewProduct> for ActiveModel {
    fn from(input: NewProduct) -> Self {
        ActiveModel {
            product_id: NotSet,
            category_id: Set(input.category_id),
            name: Set(input.name),
            price: Set(input.price),
            description: Set(input.description),
            sub_category: Set(input.sub_category),
            stock: Set(input.stock),
            is_featured: Set(input.is_featured),
            image_url: Set(input.image_url),
        }
    }
}
