use entity::menu_item_review::{ActiveModel, Column, Entity, Model};
use sea_orm::ActiveValue;

use crate::{
    model::menu_item_review::{
        CreateMenuItemReviewDto, MenuItemReviewDto, UpdateMenuItemReviewDto,
    },
    server::model::resource::Resource,
};

pub struct MenuItemReviews;

impl Resource for MenuItemReviews {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Column = Column;
    type Key = i64;
    type Record = MenuItemReviewDto;
    type Fields = CreateMenuItemReviewDto;
    type Replacement = UpdateMenuItemReviewDto;

    const NAME: &'static str = "MenuItemReview";
    const PATH: &'static str = "menuitemreview";

    fn key_column() -> Column {
        Column::Id
    }

    fn mutable_columns() -> Vec<Column> {
        vec![
            Column::ItemId,
            Column::ReviewerEmail,
            Column::Stars,
            Column::DateReviewed,
            Column::Comments,
        ]
    }

    fn create(fields: CreateMenuItemReviewDto) -> ActiveModel {
        ActiveModel {
            item_id: ActiveValue::Set(fields.item_id),
            reviewer_email: ActiveValue::Set(fields.reviewer_email),
            stars: ActiveValue::Set(fields.stars),
            date_reviewed: ActiveValue::Set(fields.date_reviewed),
            comments: ActiveValue::Set(fields.comments),
            ..Default::default()
        }
    }

    fn replace(existing: Model, replacement: UpdateMenuItemReviewDto) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Set(existing.id),
            item_id: ActiveValue::Set(replacement.item_id),
            reviewer_email: ActiveValue::Set(replacement.reviewer_email),
            stars: ActiveValue::Set(replacement.stars),
            date_reviewed: ActiveValue::Set(replacement.date_reviewed),
            comments: ActiveValue::Set(replacement.comments),
        }
    }

    fn into_record(model: Model) -> MenuItemReviewDto {
        MenuItemReviewDto {
            id: model.id,
            item_id: model.item_id,
            reviewer_email: model.reviewer_email,
            stars: model.stars,
            date_reviewed: model.date_reviewed,
            comments: model.comments,
        }
    }
}
