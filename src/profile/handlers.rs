use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::extract::{internal, AppJson};
use crate::state::AppState;
use crate::users::User;

use super::dto::{validate_points, CreateTransactionRequest, ProfileResponse};
use super::repo::{Reward, Transaction};

const RECENT_TRANSACTIONS: i64 = 20;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profile/rewards", get(list_rewards))
        .route("/profile/:user_id", get(get_profile))
        .route("/profile/:user_id/transactions", post(create_transaction))
}

#[instrument(skip(state))]
pub async fn list_rewards(
    State(state): State<AppState>,
) -> Result<Json<Vec<Reward>>, (StatusCode, String)> {
    let rewards = Reward::list(&state.db).await.map_err(internal)?;
    Ok(Json(rewards))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<ProfileResponse>, (StatusCode, String)> {
    let user = match User::find(&state.db, user_id).await.map_err(internal)? {
        Some(user) => user,
        None => {
            warn!(%user_id, "profile for unknown user");
            return Err((StatusCode::NOT_FOUND, "User not found".into()));
        }
    };

    let points_balance = Transaction::balance(&state.db, user_id)
        .await
        .map_err(internal)?;
    let transactions = Transaction::list_by_user(&state.db, user_id, RECENT_TRANSACTIONS)
        .await
        .map_err(internal)?;

    Ok(Json(ProfileResponse {
        user,
        points_balance,
        transactions,
    }))
}

#[instrument(skip(state, payload))]
pub async fn create_transaction(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    AppJson(payload): AppJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), (StatusCode, String)> {
    if let Err(reason) = validate_points(payload.points_earned, payload.points_redeemed) {
        warn!(%reason, "transaction rejected");
        return Err((StatusCode::BAD_REQUEST, reason));
    }

    if User::find(&state.db, user_id)
        .await
        .map_err(internal)?
        .is_none()
    {
        return Err((StatusCode::NOT_FOUND, "User not found".into()));
    }

    let transaction = Transaction::create(
        &state.db,
        user_id,
        payload.points_earned,
        payload.points_redeemed,
        payload.description.as_deref(),
    )
    .await
    .map_err(internal)?;

    info!(
        %user_id,
        points_earned = transaction.points_earned,
        points_redeemed = transaction.points_redeemed,
        "transaction recorded"
    );
    Ok((StatusCode::CREATED, Json(transaction)))
}
