// Blog route group: /api/blogs
//

use crate::routes::ApiError;
use crate::startup::AppState;

use axum::extract::{Path, State};
use axum::routing::{get, Router};
use axum::Json;
use futures_util::TryStreamExt;
use hyper::StatusCode;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Collection;
use serde::{Deserialize, Serialize};

use interfacing::blogs::{Blog, BlogPayload};
use static_routes::Get;

static COLLECTION: &str = "blogs";

#[derive(Serialize, Deserialize, Debug)]
struct BlogDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    title: String,
    content: String,
    author: String,
}

impl From<BlogDoc> for Blog {
    fn from(doc: BlogDoc) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: doc.title,
            content: doc.content,
            author: doc.author,
        }
    }
}

pub fn router() -> Router<AppState> {
    let paths = static_routes::routes().api.blogs;

    Router::new()
        .route("/", get(list).post(create))
        .route(paths.entry.get().postfix(), get(fetch).put(update).delete(remove))
}

fn collection(state: &AppState) -> Result<Collection<BlogDoc>, ApiError> {
    state
        .db
        .as_ref()
        .map(|db| db.collection(COLLECTION))
        .ok_or(ApiError::Unavailable)
}

fn parse_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::BadRequest(format!("invalid blog id: {}", id)))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<Blog>>, ApiError> {
    let blogs: Vec<BlogDoc> = collection(&state)?
        .find(None, None)
        .await?
        .try_collect()
        .await?;

    Ok(Json(blogs.into_iter().map(Blog::from).collect()))
}

async fn create(
    State(state): State<AppState>,
    Json(payload): Json<BlogPayload>,
) -> Result<(StatusCode, Json<Blog>), ApiError> {
    let col = collection(&state)?;

    let blog = BlogDoc {
        id: None,
        title: payload.title,
        content: payload.content,
        author: payload.author,
    };

    let inserted = col.insert_one(&blog, None).await?;
    let id = inserted
        .inserted_id
        .as_object_id()
        .ok_or(ApiError::Internal)?;

    Ok((
        StatusCode::CREATED,
        Json(Blog {
            id: id.to_hex(),
            title: blog.title,
            content: blog.content,
            author: blog.author,
        }),
    ))
}

async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Blog>, ApiError> {
    let oid = parse_id(&id)?;

    let blog = collection(&state)?
        .find_one(doc! {"_id": oid}, None)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(blog.into()))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BlogPayload>,
) -> Result<Json<Blog>, ApiError> {
    let oid = parse_id(&id)?;

    let options = FindOneAndUpdateOptions::builder()
        .return_document(ReturnDocument::After)
        .build();

    let updated = collection(&state)?
        .find_one_and_update(
            doc! {"_id": oid},
            doc! {"$set": {
                "title": payload.title.as_str(),
                "content": payload.content.as_str(),
                "author": payload.author.as_str(),
            }},
            options,
        )
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(updated.into()))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let oid = parse_id(&id)?;

    let deleted = collection(&state)?
        .delete_one(doc! {"_id": oid}, None)
        .await?;

    if deleted.deleted_count == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
