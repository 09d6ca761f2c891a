use crate::server::{
    error::{auth::AuthError, AppError},
    hypermedia::capability::{AuthorizationOracle, ADMIN},
    middleware::auth::{AuthGuard, Caller, Permission},
};


const TOKEN: &str = "s3cret-admin-token";
