use sea_orm::{ActiveValue, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{article::UpdateArticleDto, ucsb_organization::CreateUcsbOrganizationDto},
    server::{
        data::{record::RecordRepository, user::UserRepository},
        model::{
            article::Articles, resource::Resource, ucsb_organization::UcsbOrganizations,
        },
    },
};

mod record;
