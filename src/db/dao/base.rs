use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, Order, PrimaryKeyTrait, QueryOrder, QuerySelect, Select, TransactionTrait,
};

use super::base_traits::{HasIdColumn, TimestampedActiveModel};
use super::error::{DaoLayerError, DaoResult};

// SQLite binds LIMIT/OFFSET as signed 64-bit integers.
pub const MAX_SQL_OFFSET: u64 = i64::MAX as u64;

/// Shared persistence operations for entities with an integer surrogate key
/// and `created_at`/`updated_at` columns.
///
/// Every operation is a single statement or a single transaction, so a
/// row change either commits as a whole or not at all.
#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model:
        FromQueryResult + IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send + Sync,
    <Self::Entity as EntityTrait>::ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + TimestampedActiveModel
        + Send,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType:
        From<i32> + Send + Sync,
    Self::Entity: HasIdColumn,
{
    type Entity: EntityTrait + Send + Sync;
    /// Human readable name used in not-found errors.
    const ENTITY_NAME: &'static str;
    const MAX_PAGE_SIZE: u64 = 100;

    fn from_db(db: DatabaseConnection) -> Self;

    fn new(db: &DatabaseConnection) -> Self {
        Self::from_db(db.clone())
    }

    fn db(&self) -> &DatabaseConnection;

    fn not_found(id: i32) -> DaoLayerError {
        DaoLayerError::NotFound {
            entity: Self::ENTITY_NAME,
            id,
        }
    }

    /// Inserts a new row; the storage engine assigns the id and both
    /// timestamps are set to the same instant.
    async fn create(
        &self,
        data: impl IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        let now = Utc::now().fixed_offset();
        let mut active = data.into_active_model();
        active.set_created_at(now);
        active.set_updated_at(now);
        Ok(active.insert(self.db()).await?)
    }

    async fn find_by_id(&self, id: i32) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        Self::Entity::find_by_id(id)
            .one(self.db())
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    /// Builds the query for at most `limit` rows (clamped to `MAX_PAGE_SIZE`)
    /// starting at `offset`. Rows are ordered by id unless another column is
    /// requested; id stays the tiebreaker so paging is stable.
    ///
    /// `None` means the page is empty without asking the database: either
    /// the limit is zero or the offset is past anything SQLite can address.
    fn page_query(
        offset: u64,
        limit: u64,
        order: Option<(<Self::Entity as EntityTrait>::Column, Order)>,
    ) -> Option<Select<Self::Entity>> {
        let limit = limit.min(Self::MAX_PAGE_SIZE);
        if limit == 0 || offset > MAX_SQL_OFFSET {
            return None;
        }

        let id_column = Self::Entity::id_column();
        let ordered = match order {
            Some((column, order)) => Self::Entity::find()
                .order_by(column, order)
                .order_by_asc(id_column),
            None => Self::Entity::find().order_by_asc(id_column),
        };

        Some(ordered.offset(offset).limit(limit))
    }

    async fn find(
        &self,
        offset: u64,
        limit: u64,
        order: Option<(<Self::Entity as EntityTrait>::Column, Order)>,
    ) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>> {
        match Self::page_query(offset, limit, order) {
            Some(query) => Ok(query.all(self.db()).await?),
            None => Ok(Vec::new()),
        }
    }

    /// Loads the row, applies `apply`, refreshes `updated_at` and writes it
    /// back inside one transaction. A missing row is never created.
    async fn update<F>(&self, id: i32, apply: F) -> DaoResult<<Self::Entity as EntityTrait>::Model>
    where
        F: for<'a> FnOnce(&'a mut <Self::Entity as EntityTrait>::ActiveModel) + Send,
    {
        let txn = self.db().begin().await?;
        let model = Self::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        let mut active = model.into_active_model();
        apply(&mut active);
        active.set_updated_at(Utc::now().fixed_offset());

        let updated = active.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> DaoResult<i32> {
        let result = Self::Entity::delete_by_id(id).exec(self.db()).await?;

        if result.rows_affected == 0 {
            return Err(Self::not_found(id));
        }

        Ok(id)
    }
}
