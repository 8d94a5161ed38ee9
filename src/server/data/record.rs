//! Generic record repository.
//!
//! Performs the four storage operations every record resource needs: upsert by
//! identity, lookup by identity, full listing and delete. The repository returns
//! SeaORM models; conversion to client shapes happens in the controller.

use std::marker::PhantomData;

use migration::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::resource::Resource;

pub struct RecordRepository<'a, R: Resource> {
    db: &'a DatabaseConnection,
    resource: PhantomData<R>,
}

impl<'a, R: Resource> RecordRepository<'a, R> {
    /// Creates a new RecordRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            resource: PhantomData,
        }
    }

    /// Inserts a row or overwrites the row sharing its identity.
    ///
    /// Rows without an identity are inserted and receive a freshly assigned key. Rows
    /// whose identity already exists have every mutable column replaced.
    ///
    /// # Arguments
    /// - `record` - Row to store
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored row, including its identity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn store(&self, record: R::ActiveModel) -> Result<R::Model, DbErr> {
        let model = R::Entity::insert(record)
            .on_conflict(
                OnConflict::column(R::key_column())
                    .update_columns(R::mutable_columns())
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(model)
    }

    /// Finds a row by its identity.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Row found
    /// - `Ok(None)` - No row with that identity
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, key: R::Key) -> Result<Option<R::Model>, DbErr> {
        R::Entity::find_by_id(key).one(self.db).await
    }

    /// Returns every stored row in storage order.
    pub async fn find_all(&self) -> Result<Vec<R::Model>, DbErr> {
        R::Entity::find().all(self.db).await
    }

    /// Deletes the row with the given identity.
    ///
    /// Deleting an identity that does not exist is not an error.
    pub async fn delete(&self, key: R::Key) -> Result<(), DbErr> {
        R::Entity::delete_by_id(key).exec(self.db).await?;
        Ok(())
    }
}
