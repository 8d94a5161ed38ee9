use entity::recommendation_request::{ActiveModel, Column, Entity, Model};
use sea_orm::ActiveValue;

use crate::{
    model::recommendation_request::{
        CreateRecommendationRequestDto, RecommendationRequestDto, UpdateRecommendationRequestDto,
    },
    server::model::resource::Resource,
};

pub struct RecommendationRequests;

impl Resource for RecommendationRequests {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Column = Column;
    type Key = i64;
    type Record = RecommendationRequestDto;
    type Fields = CreateRecommendationRequestDto;
    type Replacement = UpdateRecommendationRequestDto;

    const NAME: &'static str = "RecommendationRequest";
    const PATH: &'static str = "recommendationrequests";

    fn key_column() -> Column {
        Column::Id
    }

    fn mutable_columns() -> Vec<Column> {
        vec![
            Column::RequesterEmail,
            Column::ProfessorEmail,
            Column::Explanation,
            Column::DateRequested,
            Column::DateNeeded,
            Column::Done,
        ]
    }

    fn create(fields: CreateRecommendationRequestDto) -> ActiveModel {
        ActiveModel {
            requester_email: ActiveValue::Set(fields.requester_email),
            professor_email: ActiveValue::Set(fields.professor_email),
            explanation: ActiveValue::Set(fields.explanation),
            date_requested: ActiveValue::Set(fields.date_requested),
            date_needed: ActiveValue::Set(fields.date_needed),
            done: ActiveValue::Set(fields.done),
            ..Default::default()
        }
    }

    fn replace(existing: Model, replacement: UpdateRecommendationRequestDto) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Set(existing.id),
            requester_email: ActiveValue::Set(replacement.requester_email),
            professor_email: ActiveValue::Set(replacement.professor_email),
            explanation: ActiveValue::Set(replacement.explanation),
            date_requested: ActiveValue::Set(replacement.date_requested),
            date_needed: ActiveValue::Set(replacement.date_needed),
            done: ActiveValue::Set(replacement.done),
        }
    }

    fn into_record(model: Model) -> RecommendationRequestDto {
        RecommendationRequestDto {
            id: model.id,
            requester_email: model.requester_email,
            professor_email: model.professor_email,
            explanation: model.explanation,
            date_requested: model.date_requested,
            date_needed: model.date_needed,
            done: model.done,
        }
    }
}
