use crate::{
    data::visit::VisitRepository,
    model::visit::{CreateVisitParams, UpdateVisitParams},
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_owner;
mod update;
