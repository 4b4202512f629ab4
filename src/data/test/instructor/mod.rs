use crate::data::instructor::InstructorRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
