//! Student organizations, keyed by their organization code.
//!
//! This is the only resource whose identity is supplied by the caller. Creating an
//! organization with a code that already exists replaces the stored organization.

use entity::ucsb_organization::{ActiveModel, Column, Entity, Model};
use sea_orm::ActiveValue;

use crate::{
    model::ucsb_organization::{
        CreateUcsbOrganizationDto, UcsbOrganizationDto, UpdateUcsbOrganizationDto,
    },
    server::model::resource::Resource,
};

pub struct UcsbOrganizations;

impl Resource for UcsbOrganizations {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Column = Column;
    type Key = String;
    type Record = UcsbOrganizationDto;
    type Fields = CreateUcsbOrganizationDto;
    type Replacement = UpdateUcsbOrganizationDto;

    const NAME: &'static str = "UCSBOrganization";
    const PATH: &'static str = "ucsborganization";
    const KEY_PARAM: &'static str = "orgCode";

    fn key_column() -> Column {
        Column::OrgCode
    }

    fn mutable_columns() -> Vec<Column> {
        vec![
            Column::OrgTranslationShort,
            Column::OrgTranslation,
            Column::Inactive,
        ]
    }

    fn create(fields: CreateUcsbOrganizationDto) -> ActiveModel {
        ActiveModel {
            org_code: ActiveValue::Set(fields.org_code),
            org_translation_short: ActiveValue::Set(fields.org_translation_short),
            org_translation: ActiveValue::Set(fields.org_translation),
            inactive: ActiveValue::Set(fields.inactive),
        }
    }

    fn replace(existing: Model, replacement: UpdateUcsbOrganizationDto) -> ActiveModel {
        ActiveModel {
            org_code: ActiveValue::Set(existing.org_code),
            org_translation_short: ActiveValue::Set(replacement.org_translation_short),
            org_translation: ActiveValue::Set(replacement.org_translation),
            inactive: ActiveValue::Set(replacement.inactive),
        }
    }

    fn into_record(model: Model) -> UcsbOrganizationDto {
        UcsbOrganizationDto {
            org_code: model.org_code,
            org_translation_short: model.org_translation_short,
            org_translation: model.org_translation,
            inactive: model.inactive,
        }
    }
}
