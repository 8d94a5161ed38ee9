//! Description of a record resource served by the generic CRUD engine.
//!
//! A resource ties together a SeaORM entity, the type of its identity, the JSON shapes
//! clients send and receive, and the capability each operation requires. The repository,
//! service, controller and router are written once against this trait.

use std::{fmt::Display, str::FromStr};

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult,
    IntoActiveModel, ModelTrait, PrimaryKeyTrait,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::server::middleware::auth::Capability;

/// The five operations every resource exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

pub trait Resource: Send + Sync + 'static {
    /// SeaORM entity backing the resource table.
    type Entity: EntityTrait<Model = Self::Model, Column = Self::Column>;
    /// Row type of the entity.
    ///
    /// Restates the bounds `EntityTrait` places on its model so generic handlers can
    /// prove their query futures are `Send`.
    type Model: IntoActiveModel<Self::ActiveModel>
        + FromQueryResult
        + ModelTrait<Entity = Self::Entity>
        + Clone
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + 'static;
    type Column: ColumnTrait;
    /// Identity of a record, as parsed from the key query parameter.
    type Key: Into<<<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType>
        + FromStr
        + Display
        + Clone
        + Send
        + Sync
        + 'static;
    /// JSON shape returned to clients.
    type Record: Serialize + Send + 'static;
    /// Query parameters accepted on create.
    type Fields: DeserializeOwned + Send + 'static;
    /// JSON body accepted on update. Omitted fields take their default value.
    type Replacement: DeserializeOwned + Send + 'static;

    /// Name used in not-found and deleted messages.
    const NAME: &'static str;
    /// Path segment under `/api`.
    const PATH: &'static str;
    /// Query parameter carrying the identity.
    const KEY_PARAM: &'static str = "id";

    /// Column holding the identity.
    fn key_column() -> Self::Column;

    /// Every column an update overwrites, i.e. all columns except the identity.
    fn mutable_columns() -> Vec<Self::Column>;

    /// Builds a row to insert from create parameters.
    ///
    /// Numeric-key resources leave the identity unset so the store assigns one.
    fn create(fields: Self::Fields) -> Self::ActiveModel;

    /// Builds the replacement row for `existing`.
    ///
    /// Keeps the identity of `existing` and takes every other column from
    /// `replacement`; nothing else from `existing` survives.
    fn replace(existing: Self::Model, replacement: Self::Replacement) -> Self::ActiveModel;

    /// Converts a stored row to its client-facing shape.
    fn into_record(model: Self::Model) -> Self::Record;

    /// Capability required to perform `operation`.
    fn capability(operation: Operation) -> Capability {
        match operation {
            Operation::List | Operation::Get => Capability::Authenticated,
            Operation::Create | Operation::Update | Operation::Delete => Capability::Elevated,
        }
    }

    fn not_found_message(key: &Self::Key) -> String {
        format!("{} with id {} not found", Self::NAME, key)
    }

    fn deleted_message(key: &Self::Key) -> String {
        format!("{} with id {} deleted", Self::NAME, key)
    }
}
