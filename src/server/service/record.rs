//! Generic record service.
//!
//! Orchestrates the repository calls behind the five resource operations and turns a
//! missing identity into `AppError::NotFound` carrying the resource's message.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::record::RecordRepository, error::AppError, model::resource::Resource,
};

pub struct RecordService<'a, R: Resource> {
    repo: RecordRepository<'a, R>,
}

impl<'a, R: Resource> RecordService<'a, R> {
    /// Creates a new RecordService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            repo: RecordRepository::new(db),
        }
    }

    /// Returns every stored record of the resource.
    pub async fn list(&self) -> Result<Vec<R::Model>, AppError> {
        Ok(self.repo.find_all().await?)
    }

    /// Retrieves a record by identity.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored record
    /// - `Err(AppError::NotFound)` - No record has that identity
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, key: R::Key) -> Result<R::Model, AppError> {
        self.repo
            .find_by_id(key.clone())
            .await?
            .ok_or_else(|| AppError::NotFound(R::not_found_message(&key)))
    }

    /// Stores a new record built from `fields`.
    ///
    /// For resources whose identity is supplied by the caller, an existing record with
    /// the same identity is overwritten.
    pub async fn create(&self, fields: R::Fields) -> Result<R::Model, AppError> {
        let model = self.repo.store(R::create(fields)).await?;

        tracing::info!("Created {} record", R::NAME);

        Ok(model)
    }

    /// Replaces every mutable field of the record with `replacement`.
    ///
    /// # Returns
    /// - `Ok(Model)` - The record as stored after the replacement
    /// - `Err(AppError::NotFound)` - No record has that identity; nothing is written
    /// - `Err(AppError::DbErr)` - Database error during query or write
    pub async fn update(&self, key: R::Key, replacement: R::Replacement) -> Result<R::Model, AppError> {
        let existing = self.get(key.clone()).await?;

        let model = self.repo.store(R::replace(existing, replacement)).await?;

        tracing::info!("Updated {} with id {}", R::NAME, key);

        Ok(model)
    }

    /// Deletes the record with the given identity.
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation message naming the deleted identity
    /// - `Err(AppError::NotFound)` - No record has that identity
    /// - `Err(AppError::DbErr)` - Database error during query or delete
    pub async fn delete(&self, key: R::Key) -> Result<String, AppError> {
        self.get(key.clone()).await?;

        self.repo.delete(key.clone()).await?;

        tracing::info!("Deleted {} with id {}", R::NAME, key);

        Ok(R::deleted_message(&key))
    }
}
