//! Blog CRUD handlers.
//!
//! Each handler extracts its inputs, issues one repository call, and maps
//! the outcome onto the uniform envelope. Every request yields exactly one
//! response; store failures surface as the server-error envelope via
//! [`AppError`].

use actix_web::{HttpResponse, web};

use quill_core::domain::{Blog, BlogFields};
use quill_shared::{ApiResponse, ListQuery, Paginated};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET / - list blogs matching an optional search term, paginated.
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let page = state
        .blogs
        .list(&query.search, query.page, query.limit)
        .await?;
    let data = Paginated::new(page.items, page.total, query.page, query.limit);

    Ok(HttpResponse::Ok().json(ApiResponse::ok("success", data)))
}

/// GET /{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let blog = state
        .blogs
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("blog with id does not exist".to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("found blog", blog)))
}

/// POST /create - persist a new blog under a freshly generated id.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<BlogFields>,
) -> AppResult<HttpResponse> {
    let blog = Blog::new(body.into_inner());
    let created = state.blogs.insert(blog).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created("blog successfully created", created)))
}

/// POST /{id} - overwrite the four mutable fields of an existing blog.
///
/// The repository performs the existence check and the write as one atomic
/// operation, so a concurrent delete cannot slip between them.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BlogFields>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let updated = state
        .blogs
        .update(&id, body.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("could not find blog with id".to_string()))?;

    Ok(HttpResponse::Created().json(ApiResponse::created("blog successfully updated", updated)))
}

/// DELETE /{id} - remove a blog, answering with its last known data.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let deleted = state
        .blogs
        .delete(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("blog with id does not exist".to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("blog deleted", deleted)))
}
