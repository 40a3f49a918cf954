use axum::{
    extract::{rejection::JsonRejection, RawQuery, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};

use crate::{
    error::{ApiError, StoreError},
    state::AppState,
    users::{
        dto::{MatchQuery, MatchResponse, MessageResponse, SignupRequest},
        repo_types::NewUser,
    },
};

#[instrument(skip(state, body))]
pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(body) = body.map_err(|rejection| {
        let reason = rejection.body_text();
        warn!(%reason, "rejected signup body");
        ApiError::BadRequest(reason)
    })?;

    let user = NewUser::from(body);
    match state.users.insert_user(&user).await {
        Ok(id) => {
            info!(user_id = id, email = %user.email, roster = %user.roster, "user registered");
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse {
                    message: "User registered successfully!".into(),
                }),
            ))
        }
        Err(StoreError::DuplicateEmail) => {
            warn!(email = %user.email, "email already registered");
            Err(ApiError::DuplicateEmail)
        }
        Err(e) => Err(e.into()),
    }
}

#[instrument(skip(state))]
pub async fn match_users(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<MatchResponse>, ApiError> {
    let query = MatchQuery::from_raw(raw.as_deref()).map_err(|e| {
        warn!(error = %e, "rejected match query");
        ApiError::BadRequest(e.to_string())
    })?;
    let rows = state
        .users
        .find_users_by_roster(query.roster.as_deref())
        .await?;
    Ok(Json(MatchResponse {
        matches: rows.into_iter().map(Into::into).collect(),
    }))
}
