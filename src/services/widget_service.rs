use crate::{
    db::dao::{WidgetDao, WidgetOrder},
    db::entities::widget,
    error::AppError,
    schemas::{WidgetInput, WidgetPatch},
};

#[derive(Clone)]
pub struct WidgetService {
    widget_dao: WidgetDao,
}

impl WidgetService {
    pub fn new(widget_dao: WidgetDao) -> Self {
        Self { widget_dao }
    }

    pub async fn create(&self, input: &WidgetInput) -> Result<widget::Model, AppError> {
        Ok(self
            .widget_dao
            .create_widget(&input.name, input.number_of_parts)
            .await?)
    }

    pub async fn get(&self, id: i32) -> Result<widget::Model, AppError> {
        Ok(self.widget_dao.find_widget(id).await?)
    }

    /// Returns the requested page together with the total row count.
    pub async fn list(
        &self,
        offset: u64,
        limit: u64,
        order: WidgetOrder,
    ) -> Result<(Vec<widget::Model>, u64), AppError> {
        Ok(self
            .widget_dao
            .list_widgets_page(offset, limit, order)
            .await?)
    }

    pub async fn update(&self, id: i32, input: &WidgetInput) -> Result<widget::Model, AppError> {
        Ok(self
            .widget_dao
            .update_widget(id, &input.name, input.number_of_parts)
            .await?)
    }

    pub async fn patch(&self, id: i32, patch: WidgetPatch) -> Result<widget::Model, AppError> {
        Ok(self
            .widget_dao
            .patch_widget(id, patch.name, patch.number_of_parts)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(self.widget_dao.delete_widget(id).await?)
    }
}
