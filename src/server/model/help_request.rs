//! Help requests raised by teams during lab sessions.

use entity::help_request::{ActiveModel, Column, Entity, Model};
use sea_orm::ActiveValue;

use crate::{
    model::help_request::{CreateHelpRequestDto, HelpRequestDto, UpdateHelpRequestDto},
    server::model::resource::Resource,
};

pub struct HelpRequests;

impl Resource for HelpRequests {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Column = Column;
    type Key = i64;
    type Record = HelpRequestDto;
    type Fields = CreateHelpRequestDto;
    type Replacement = UpdateHelpRequestDto;

    const NAME: &'static str = "HelpRequest";
    const PATH: &'static str = "helprequests";

    fn key_column() -> Column {
        Column::Id
    }

    fn mutable_columns() -> Vec<Column> {
        vec![
            Column::RequesterEmail,
            Column::TeamId,
            Column::TableOrBreakoutRoom,
            Column::RequestTime,
            Column::Explanation,
            Column::Solved,
        ]
    }

    fn create(fields: CreateHelpRequestDto) -> ActiveModel {
        ActiveModel {
            requester_email: ActiveValue::Set(fields.requester_email),
            team_id: ActiveValue::Set(fields.team_id),
            table_or_breakout_room: ActiveValue::Set(fields.table_or_breakout_room),
            request_time: ActiveValue::Set(fields.request_time),
            explanation: ActiveValue::Set(fields.explanation),
            solved: ActiveValue::Set(fields.solved),
            ..Default::default()
        }
    }

    fn replace(existing: Model, replacement: UpdateHelpRequestDto) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Set(existing.id),
            requester_email: ActiveValue::Set(replacement.requester_email),
            team_id: ActiveValue::Set(replacement.team_id),
            table_or_breakout_room: ActiveValue::Set(replacement.table_or_breakout_room),
            request_time: ActiveValue::Set(replacement.request_time),
            explanation: ActiveValue::Set(replacement.explanation),
            solved: ActiveValue::Set(replacement.solved),
        }
    }

    fn into_record(model: Model) -> HelpRequestDto {
        HelpRequestDto {
            id: model.id,
            requester_email: model.requester_email,
            team_id: model.team_id,
            table_or_breakout_room: model.table_or_breakout_room,
            request_time: model.request_time,
            explanation: model.explanation,
            solved: model.solved,
        }
    }
}
