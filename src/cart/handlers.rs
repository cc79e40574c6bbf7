use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::extract::{internal, AppJson};
use crate::products::Product;
use crate::state::AppState;

use super::dto::{AddToCartRequest, CartView};
use super::repo::CartItem;

pub fn routes() -> Router<AppState> {
    // POST interprets the path id as a product id (the frontend's contract);
    // GET interprets it as a cart id.
    Router::new()
        .route("/cart/:id", post(add_to_cart).get(get_cart))
        .route("/cart/:id/items/:product_id", delete(remove_from_cart))
}

#[instrument(skip(state, payload))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    AppJson(payload): AppJson<AddToCartRequest>,
) -> Result<Json<CartItem>, (StatusCode, String)> {
    if payload.quantity < 1 {
        warn!(quantity = payload.quantity, "add to cart rejected");
        return Err((StatusCode::BAD_REQUEST, "quantity must be at least 1".into()));
    }

    if Product::find(&state.db, product_id)
        .await
        .map_err(internal)?
        .is_none()
    {
        warn!(%product_id, "add to cart for unknown product");
        return Err((StatusCode::NOT_FOUND, "Product not found".into()));
    }

    let item = CartItem::add(&state.db, payload.cart_id, product_id, payload.quantity)
        .await
        .map_err(internal)?;

    info!(cart_id = item.cart_id, %product_id, quantity = item.quantity, "product added to cart");
    Ok(Json(item))
}

#[instrument(skip(state))]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<i32>,
) -> Result<Json<CartView>, (StatusCode, String)> {
    let items = CartItem::list(&state.db, cart_id).await.map_err(internal)?;
    Ok(Json(CartView::new(cart_id, items)))
}

#[instrument(skip(state))]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path((cart_id, product_id)): Path<(i32, i32)>,
) -> Result<StatusCode, (StatusCode, String)> {
    if CartItem::remove(&state.db, cart_id, product_id)
        .await
        .map_err(internal)?
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Cart item not found".into()))
    }
}
