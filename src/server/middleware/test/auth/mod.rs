use test_utils::builder::TestBuilder;
use test_utils::factory::user::{create_admin, create_student, create_teacher, UserFactory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
};

mod require_admin;
mod require_role;
mod require_session;
