//! Help request factory for creating test help request entities.

use crate::factory::helpers::{midnight, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test help requests with customizable fields.
pub struct HelpRequestFactory<'a> {
    db: &'a DatabaseConnection,
    requester_email: String,
    team_id: String,
    solved: bool,
}

impl<'a> HelpRequestFactory<'a> {
    /// Creates a new HelpRequestFactory with default values.
    ///
    /// Defaults:
    /// - requester_email: `"student{n}@ucsb.edu"`
    /// - team_id: `"s22-5pm-{n}"`
    /// - solved: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            requester_email: format!("student{}@ucsb.edu", n),
            team_id: format!("s22-5pm-{}", n),
            solved: false,
        }
    }

    pub fn solved(mut self, solved: bool) -> Self {
        self.solved = solved;
        self
    }

    /// Builds and inserts the help request entity into the database.
    pub async fn build(self) -> Result<entity::help_request::Model, DbErr> {
        entity::help_request::ActiveModel {
            id: ActiveValue::NotSet,
            requester_email: ActiveValue::Set(self.requester_email),
            team_id: ActiveValue::Set(self.team_id),
            table_or_breakout_room: ActiveValue::Set("7".to_string()),
            request_time: ActiveValue::Set(midnight(2022, 4, 20)),
            explanation: ActiveValue::Set("Need help with Swagger-ui".to_string()),
            solved: ActiveValue::Set(self.solved),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a help request with default values.
pub async fn create_help_request(
    db: &DatabaseConnection,
) -> Result<entity::help_request::Model, DbErr> {
    HelpRequestFactory::new(db).build().await
}
