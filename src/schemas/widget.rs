use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::db::dao::{WidgetOrder, WidgetOrderColumn};
use crate::db::entities::widget;

pub const NAME_MAX_CHARS: u64 = 64;
pub const DEFAULT_LIST_LIMIT: u64 = 100;

/// Body accepted by create and full update. `name` arrives already trimmed.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WidgetInput {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        max = NAME_MAX_CHARS,
        message = "Name must be between 1 and 64 characters and cannot be whitespace only"
    ))]
    pub name: String,
    #[validate(range(min = 1, message = "Number of parts must be a positive integer"))]
    pub number_of_parts: i32,
}

/// Body accepted by partial update; omitted fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct WidgetPatch {
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(
        min = 1,
        max = NAME_MAX_CHARS,
        message = "Name must be between 1 and 64 characters and cannot be whitespace only"
    ))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, message = "Number of parts must be a positive integer"))]
    pub number_of_parts: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetResponse {
    pub id: i32,
    pub name: String,
    pub number_of_parts: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<widget::Model> for WidgetResponse {
    fn from(model: widget::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            number_of_parts: model.number_of_parts,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetOrderBy {
    #[default]
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

impl From<WidgetOrderBy> for WidgetOrderColumn {
    fn from(order_by: WidgetOrderBy) -> Self {
        match order_by {
            WidgetOrderBy::Id => WidgetOrderColumn::Id,
            WidgetOrderBy::Name => WidgetOrderColumn::Name,
            WidgetOrderBy::CreatedAt => WidgetOrderColumn::CreatedAt,
            WidgetOrderBy::UpdatedAt => WidgetOrderColumn::UpdatedAt,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListWidgetsQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    pub order_by: Option<WidgetOrderBy>,
    pub order_desc: Option<bool>,
}

impl ListWidgetsQuery {
    pub fn offset(&self) -> u64 {
        self.skip.unwrap_or(0)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }

    pub fn order(&self) -> WidgetOrder {
        WidgetOrder {
            column: self.order_by.unwrap_or_default().into(),
            descending: self.order_desc.unwrap_or(false),
        }
    }
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

fn trimmed_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|value| value.trim().to_string()))
}
