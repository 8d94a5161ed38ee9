//! Article factory for creating test article entities.

use crate::factory::helpers::{midnight, next_id};
use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    url: String,
    explanation: String,
    email: String,
    date_added: NaiveDateTime,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Article {n}"` where n is auto-incremented
    /// - url: `"https://example.com/{n}"`
    /// - date_added: 2022-01-03T00:00:00
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            title: format!("Article {}", n),
            url: format!("https://example.com/{}", n),
            explanation: format!("Explanation {}", n),
            email: format!("author{}@ucsb.edu", n),
            date_added: midnight(2022, 1, 3),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn date_added(mut self, date_added: NaiveDateTime) -> Self {
        self.date_added = date_added;
        self
    }

    /// Builds and inserts the article entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::article::Model)` - Created article with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            url: ActiveValue::Set(self.url),
            explanation: ActiveValue::Set(self.explanation),
            email: ActiveValue::Set(self.email),
            date_added: ActiveValue::Set(self.date_added),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values.
pub async fn create_article(db: &DatabaseConnection) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_article_with_assigned_id() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Article).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_article(db).await?;
        let second = ArticleFactory::new(db).title("Custom").build().await?;

        assert_ne!(first.id, second.id);
        assert_eq!(second.title, "Custom");

        Ok(())
    }
}
