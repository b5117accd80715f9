use sea_orm::DatabaseConnection;

use super::{DaoBase, WidgetDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn widget(&self) -> WidgetDao {
        DaoBase::new(&self.db)
    }
}
