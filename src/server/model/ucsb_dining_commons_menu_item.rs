use entity::ucsb_dining_commons_menu_item::{ActiveModel, Column, Entity, Model};
use sea_orm::ActiveValue;

use crate::{
    model::ucsb_dining_commons_menu_item::{
        CreateUcsbDiningCommonsMenuItemDto, UcsbDiningCommonsMenuItemDto,
        UpdateUcsbDiningCommonsMenuItemDto,
    },
    server::model::resource::Resource,
};

pub struct UcsbDiningCommonsMenuItems;

impl Resource for UcsbDiningCommonsMenuItems {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Column = Column;
    type Key = i64;
    type Record = UcsbDiningCommonsMenuItemDto;
    type Fields = CreateUcsbDiningCommonsMenuItemDto;
    type Replacement = UpdateUcsbDiningCommonsMenuItemDto;

    const NAME: &'static str = "UCSBDiningCommonsMenuItem";
    const PATH: &'static str = "ucsb-dining-commons-menu-items";

    fn key_column() -> Column {
        Column::Id
    }

    fn mutable_columns() -> Vec<Column> {
        vec![Column::DiningCommonsCode, Column::Name, Column::Station]
    }

    fn create(fields: CreateUcsbDiningCommonsMenuItemDto) -> ActiveModel {
        ActiveModel {
            dining_commons_code: ActiveValue::Set(fields.dining_commons_code),
            name: ActiveValue::Set(fields.name),
            station: ActiveValue::Set(fields.station),
            ..Default::default()
        }
    }

    fn replace(existing: Model, replacement: UpdateUcsbDiningCommonsMenuItemDto) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Set(existing.id),
            dining_commons_code: ActiveValue::Set(replacement.dining_commons_code),
            name: ActiveValue::Set(replacement.name),
            station: ActiveValue::Set(replacement.station),
        }
    }

    fn into_record(model: Model) -> UcsbDiningCommonsMenuItemDto {
        UcsbDiningCommonsMenuItemDto {
            id: model.id,
            dining_commons_code: model.dining_commons_code,
            name: model.name,
            station: model.station,
        }
    }
}
