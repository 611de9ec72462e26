use crate::{data::order::OrderRepository, model::order::CreateOrderParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_visit_id;
