use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Category, NewCategory};

/// Sea-ORM entity for the `categories` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub category_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// OpenAPI tag for category endpoints
    pub const TAG: &'static str = "categories";
}

impl From<Model> for Category {
    fn from(model: Model) -> Self {
        Self {
            category_id: model.category_id,
            name: model.name,
            description: model.description,
        }
    }
}

impl From<NewCategory> for ActiveModel {
    fn from(input: NewCategory) -> Self {
        ActiveModel {
            category_id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
        }
    }
}

impl From<Category> for ActiveModel {
    fn from(category: Category) -> Self {
        ActiveModel {
            category_id: Set(category.category_id),
            name: Set(category.name),
            description: Set(category.description),
        }
    }
}
