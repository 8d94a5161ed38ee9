//! Articles: links with an explanation, submitted by email address.

use entity::article::{ActiveModel, Column, Entity, Model};
use sea_orm::ActiveValue;

use crate::{
    model::article::{ArticleDto, CreateArticleDto, UpdateArticleDto},
    server::model::resource::Resource,
};

pub struct Articles;

impl Resource for Articles {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Column = Column;
    type Key = i64;
    type Record = ArticleDto;
    type Fields = CreateArticleDto;
    type Replacement = UpdateArticleDto;

    const NAME: &'static str = "Articles";
    const PATH: &'static str = "articles";

    fn key_column() -> Column {
        Column::Id
    }

    fn mutable_columns() -> Vec<Column> {
        vec![
            Column::Title,
            Column::Url,
            Column::Explanation,
            Column::Email,
            Column::DateAdded,
        ]
    }

    fn create(fields: CreateArticleDto) -> ActiveModel {
        ActiveModel {
            title: ActiveValue::Set(fields.title),
            url: ActiveValue::Set(fields.url),
            explanation: ActiveValue::Set(fields.explanation),
            email: ActiveValue::Set(fields.email),
            date_added: ActiveValue::Set(fields.date_added),
            ..Default::default()
        }
    }

    fn replace(existing: Model, replacement: UpdateArticleDto) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Set(existing.id),
            title: ActiveValue::Set(replacement.title),
            url: ActiveValue::Set(replacement.url),
            explanation: ActiveValue::Set(replacement.explanation),
            email: ActiveValue::Set(replacement.email),
            date_added: ActiveValue::Set(replacement.date_added),
        }
    }

    fn into_record(model: Model) -> ArticleDto {
        ArticleDto {
            id: model.id,
            title: model.title,
            url: model.url,
            explanation: model.explanation,
            email: model.email,
            date_added: model.date_added,
        }
    }
}
