//! Recommendation request factory for creating test entities.

use crate::factory::helpers::{midnight, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test recommendation requests with customizable fields.
pub struct RecommendationRequestFactory<'a> {
    db: &'a DatabaseConnection,
    requester_email: String,
    professor_email: String,
    done: bool,
}

impl<'a> RecommendationRequestFactory<'a> {
    /// Creates a new RecommendationRequestFactory with default values.
    ///
    /// Defaults:
    /// - requester_email: `"student{n}@ucsb.edu"`
    /// - professor_email: `"professor{n}@ucsb.edu"`
    /// - done: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            requester_email: format!("student{}@ucsb.edu", n),
            professor_email: format!("professor{}@ucsb.edu", n),
            done: false,
        }
    }

    pub fn done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Builds and inserts the recommendation request entity into the database.
    pub async fn build(self) -> Result<entity::recommendation_request::Model, DbErr> {
        entity::recommendation_request::ActiveModel {
            id: ActiveValue::NotSet,
            requester_email: ActiveValue::Set(self.requester_email),
            professor_email: ActiveValue::Set(self.professor_email),
            explanation: ActiveValue::Set("Graduate school application".to_string()),
            date_requested: ActiveValue::Set(midnight(2022, 4, 20)),
            date_needed: ActiveValue::Set(midnight(2022, 5, 1)),
            done: ActiveValue::Set(self.done),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a recommendation request with default values.
pub async fn create_recommendation_request(
    db: &DatabaseConnection,
) -> Result<entity::recommendation_request::Model, DbErr> {
    RecommendationRequestFactory::new(db).build().await
}
