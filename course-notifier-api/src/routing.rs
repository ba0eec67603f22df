use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::Permission,
    dto::{input, output},
    error::Error,
    service::{
        authors_service::AuthorsService, courses_service::CoursesService,
        roles_service::RolesService, users_service::UsersService,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use jwt_auth::{require_all_permissions, User};
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/courses", get(get_courses).post(post_course))
        .route(
            "/api/v1/courses/:id",
            get(get_course).put(put_course).delete(delete_course),
        )
        .route("/api/v1/authors", get(get_authors).post(post_author))
        .route(
            "/api/v1/authors/:id",
            get(get_author).put(put_author).delete(delete_author),
        )
        .route("/api/v1/users", get(get_users).post(post_user))
        .route(
            "/api/v1/users/:id",
            get(get_user).put(put_user).delete(delete_user),
        )
        .route("/api/v1/roles", get(get_roles).post(post_role))
        .route(
            "/api/v1/roles/:id",
            get(get_role).put(put_role).delete(delete_role),
        )
        .route("/api/v1/permissions", get(get_permissions))
        .route_layer(application_middleware.auth.clone())
}

// Courses

async fn get_courses(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn CoursesService>>,
) -> Result<Json<Vec<output::Course>>, Error> {
    require_all_permissions(&user, &[Permission::CourseView])?;

    let courses = service.find_courses().await?;

    Ok(Json(courses))
}

async fn get_course(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn CoursesService>>,
    Path(id): Path<String>,
) -> Result<Json<output::Course>, Error> {
    require_all_permissions(&user, &[Permission::CourseView])?;

    let course = service.find_course(&id).await?;

    Ok(Json(course))
}

async fn post_course(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn CoursesService>>,
    Json(course): Json<input::Course>,
) -> Result<(StatusCode, Json<output::Course>), Error> {
    require_all_permissions(&user, &[Permission::CourseEdit])?;

    let course = service.create_course(&user, course).await?;

    Ok((StatusCode::CREATED, Json(course)))
}

async fn put_course(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn CoursesService>>,
    Path(id): Path<String>,
    Json(course): Json<input::Course>,
) -> Result<Json<output::Course>, Error> {
    require_all_permissions(&user, &[Permission::CourseEdit])?;

    let course = service.update_course(&user, &id, course).await?;

    Ok(Json(course))
}

async fn delete_course(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn CoursesService>>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    require_all_permissions(&user, &[Permission::CourseEdit])?;

    service.delete_course(&user, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// Authors

async fn get_authors(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn AuthorsService>>,
) -> Result<Json<Vec<output::Author>>, Error> {
    require_all_permissions(&user, &[Permission::CourseView])?;

    let authors = service.find_authors().await?;

    Ok(Json(authors))
}

async fn get_author(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn AuthorsService>>,
    Path(id): Path<String>,
) -> Result<Json<output::Author>, Error> {
    require_all_permissions(&user, &[Permission::CourseView])?;

    let author = service.find_author(&id).await?;

    Ok(Json(author))
}

async fn post_author(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn AuthorsService>>,
    Json(author): Json<input::Author>,
) -> Result<(StatusCode, Json<output::Author>), Error> {
    require_all_permissions(&user, &[Permission::CourseEdit])?;

    let author = service.create_author(&user, author).await?;

    Ok((StatusCode::CREATED, Json(author)))
}

async fn put_author(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn AuthorsService>>,
    Path(id): Path<String>,
    Json(author): Json<input::Author>,
) -> Result<Json<output::Author>, Error> {
    require_all_permissions(&user, &[Permission::CourseEdit])?;

    let author = service.update_author(&user, &id, author).await?;

    Ok(Json(author))
}

async fn delete_author(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn AuthorsService>>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    require_all_permissions(&user, &[Permission::CourseEdit])?;

    service.delete_author(&user, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// Users

async fn get_users(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn UsersService>>,
) -> Result<Json<Vec<output::User>>, Error> {
    require_all_permissions(&user, &[Permission::UserManage])?;

    let users = service.find_users().await?;

    Ok(Json(users))
}

async fn get_user(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn UsersService>>,
    Path(id): Path<String>,
) -> Result<Json<output::User>, Error> {
    require_all_permissions(&user, &[Permission::UserManage])?;

    let found_user = service.find_user(&id).await?;

    Ok(Json(found_user))
}

async fn post_user(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn UsersService>>,
    Json(new_user): Json<input::User>,
) -> Result<(StatusCode, Json<output::User>), Error> {
    require_all_permissions(&user, &[Permission::UserManage])?;

    let created_user = service.create_user(&user, new_user).await?;

    Ok((StatusCode::CREATED, Json(created_user)))
}

async fn put_user(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn UsersService>>,
    Path(id): Path<String>,
    Json(updated_user): Json<input::User>,
) -> Result<Json<output::User>, Error> {
    require_all_permissions(&user, &[Permission::UserManage])?;

    let saved_user = service.update_user(&user, &id, updated_user).await?;

    Ok(Json(saved_user))
}

async fn delete_user(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn UsersService>>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    require_all_permissions(&user, &[Permission::UserManage])?;

    service.delete_user(&user, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// Roles

async fn get_roles(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn RolesService>>,
) -> Result<Json<Vec<output::Role>>, Error> {
    require_all_permissions(&user, &[Permission::RoleManage])?;

    let roles = service.find_roles().await?;

    Ok(Json(roles))
}

async fn get_role(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn RolesService>>,
    Path(id): Path<String>,
) -> Result<Json<output::Role>, Error> {
    require_all_permissions(&user, &[Permission::RoleManage])?;

    let role = service.find_role(&id).await?;

    Ok(Json(role))
}

async fn post_role(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn RolesService>>,
    Json(role): Json<input::Role>,
) -> Result<(StatusCode, Json<output::Role>), Error> {
    require_all_permissions(&user, &[Permission::RoleManage])?;

    let role = service.create_role(role).await?;

    Ok((StatusCode::CREATED, Json(role)))
}

async fn put_role(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn RolesService>>,
    Path(id): Path<String>,
    Json(role): Json<input::Role>,
) -> Result<Json<output::Role>, Error> {
    require_all_permissions(&user, &[Permission::RoleManage])?;

    let role = service.update_role(&id, role).await?;

    Ok(Json(role))
}

async fn delete_role(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn RolesService>>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    require_all_permissions(&user, &[Permission::RoleManage])?;

    service.delete_role(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn get_permissions(
    Extension(user): Extension<User>,
    State(service): State<Arc<dyn RolesService>>,
) -> Result<Json<Vec<Permission>>, Error> {
    require_all_permissions(&user, &[Permission::RoleManage])?;

    Ok(Json(service.find_permissions()))
}
