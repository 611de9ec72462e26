use crate::{
    data::visit::VisitRepository,
    error::{auth::AuthError, AppError},
    middleware::owner::OwnerGuard,
};
use test_utils::{builder::TestBuilder, factory};

mod require;
