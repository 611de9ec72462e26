use crate::data::restaurant::RestaurantRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod search;
