use sea_orm::{DatabaseConnection, EntityTrait, Order, PaginatorTrait, Set, TransactionTrait};
use tracing::{debug, info};

use super::{DaoBase, DaoResult};
use crate::db::entities::prelude::Widget;
use crate::db::entities::widget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetOrderColumn {
    #[default]
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetOrder {
    pub column: WidgetOrderColumn,
    pub descending: bool,
}

impl WidgetOrder {
    fn into_query_order(self) -> (widget::Column, Order) {
        let column = match self.column {
            WidgetOrderColumn::Id => widget::Column::Id,
            WidgetOrderColumn::Name => widget::Column::Name,
            WidgetOrderColumn::CreatedAt => widget::Column::CreatedAt,
            WidgetOrderColumn::UpdatedAt => widget::Column::UpdatedAt,
        };
        let order = if self.descending {
            Order::Desc
        } else {
            Order::Asc
        };
        (column, order)
    }
}

#[derive(Clone)]
pub struct WidgetDao {
    db: DatabaseConnection,
}

impl DaoBase for WidgetDao {
    type Entity = Widget;
    const ENTITY_NAME: &'static str = "Widget";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WidgetDao {
    pub async fn create_widget(
        &self,
        name: &str,
        number_of_parts: i32,
    ) -> DaoResult<widget::Model> {
        let model = widget::ActiveModel {
            name: Set(name.to_string()),
            number_of_parts: Set(number_of_parts),
            ..Default::default()
        };
        let created = self.create(model).await?;
        info!(widget_id = created.id, "created widget");
        Ok(created)
    }

    pub async fn find_widget(&self, id: i32) -> DaoResult<widget::Model> {
        let widget = self.find_by_id(id).await?;
        debug!(widget_id = id, "retrieved widget");
        Ok(widget)
    }

    pub async fn list_widgets(
        &self,
        offset: u64,
        limit: u64,
        order: WidgetOrder,
    ) -> DaoResult<Vec<widget::Model>> {
        let widgets = self
            .find(offset, limit, Some(order.into_query_order()))
            .await?;
        debug!(offset, limit, returned = widgets.len(), "listed widgets");
        Ok(widgets)
    }

    pub async fn count_widgets(&self) -> DaoResult<u64> {
        Ok(Widget::find().count(&self.db).await?)
    }

    /// Reads one page and the total row count inside a single transaction so
    /// the two agree with each other.
    pub async fn list_widgets_page(
        &self,
        offset: u64,
        limit: u64,
        order: WidgetOrder,
    ) -> DaoResult<(Vec<widget::Model>, u64)> {
        let txn = self.db.begin().await?;
        let widgets = match Self::page_query(offset, limit, Some(order.into_query_order())) {
            Some(query) => query.all(&txn).await?,
            None => Vec::new(),
        };
        let total = Widget::find().count(&txn).await?;
        txn.commit().await?;

        debug!(offset, limit, returned = widgets.len(), total, "listed widget page");
        Ok((widgets, total))
    }

    pub async fn update_widget(
        &self,
        id: i32,
        name: &str,
        number_of_parts: i32,
    ) -> DaoResult<widget::Model> {
        let name = name.to_string();
        let updated = self
            .update(id, move |active| {
                active.name = Set(name);
                active.number_of_parts = Set(number_of_parts);
            })
            .await?;
        info!(widget_id = id, "updated widget");
        Ok(updated)
    }

    /// Applies only the supplied fields. An empty patch returns the stored
    /// row without touching `updated_at`.
    pub async fn patch_widget(
        &self,
        id: i32,
        name: Option<String>,
        number_of_parts: Option<i32>,
    ) -> DaoResult<widget::Model> {
        if name.is_none() && number_of_parts.is_none() {
            return self.find_widget(id).await;
        }

        let updated = self
            .update(id, move |active| {
                if let Some(name) = name {
                    active.name = Set(name);
                }
                if let Some(number_of_parts) = number_of_parts {
                    active.number_of_parts = Set(number_of_parts);
                }
            })
            .await?;
        info!(widget_id = id, "patched widget");
        Ok(updated)
    }

    pub async fn delete_widget(&self, id: i32) -> DaoResult<()> {
        self.delete(id).await?;
        info!(widget_id = id, "deleted widget");
        Ok(())
    }
}
