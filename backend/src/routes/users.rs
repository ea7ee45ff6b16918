// User route group: /api/users
//

use crate::routes::ApiError;
use crate::startup::AppState;

use axum::extract::State;
use axum::routing::{get, post, Router};
use axum::Json;
use futures_util::TryStreamExt;
use hyper::StatusCode;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::Collection;
use serde::{Deserialize, Serialize};

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use interfacing::users::{LoginForm, SignupForm, User};
use static_routes::Post;

static COLLECTION: &str = "users";

#[derive(Serialize, Deserialize, Debug)]
struct UserDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
    password_hash: String,
}

impl From<UserDoc> for User {
    fn from(doc: UserDoc) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doc.name,
            email: doc.email,
        }
    }
}

pub fn router() -> Router<AppState> {
    let paths = static_routes::routes().api.users;

    Router::new()
        .route("/", get(list))
        .route(paths.signup.post().postfix(), post(signup))
        .route(paths.login.post().postfix(), post(login))
}

fn collection(state: &AppState) -> Result<Collection<UserDoc>, ApiError> {
    state
        .db
        .as_ref()
        .map(|db| db.collection(COLLECTION))
        .ok_or(ApiError::Unavailable)
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users: Vec<UserDoc> = collection(&state)?
        .find(None, None)
        .await?
        .try_collect()
        .await?;

    Ok(Json(users.into_iter().map(User::from).collect()))
}

async fn signup(
    State(state): State<AppState>,
    Json(form): Json<SignupForm>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let col = collection(&state)?;

    if col
        .find_one(doc! {"email": form.email.as_str()}, None)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict);
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(form.password.as_bytes(), &salt)
        .map_err(|_| ApiError::Internal)?
        .to_string();

    let user = UserDoc {
        id: None,
        name: form.name,
        email: form.email,
        password_hash,
    };

    let inserted = col.insert_one(&user, None).await?;
    let id = inserted
        .inserted_id
        .as_object_id()
        .ok_or(ApiError::Internal)?;

    Ok((
        StatusCode::CREATED,
        Json(User {
            id: id.to_hex(),
            name: user.name,
            email: user.email,
        }),
    ))
}

async fn login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> Result<Json<User>, ApiError> {
    let col = collection(&state)?;

    let user = col
        .find_one(doc! {"email": form.email.as_str()}, None)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    let parsed = PasswordHash::new(&user.password_hash).map_err(|_| ApiError::Internal)?;
    Argon2::default()
        .verify_password(form.password.as_bytes(), &parsed)
        .map_err(|_| ApiError::Unauthorized)?;

    Ok(Json(user.into()))
}
