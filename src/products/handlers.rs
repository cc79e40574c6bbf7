use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::extract::{internal, AppJson};
use crate::state::AppState;

use super::dto::{validate_price_and_stock, CreateProductRequest, SearchQuery, UpdateProductRequest};
use super::repo::Product;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/search", get(search_products))
        .route("/products/:id", get(get_product))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product))
        .route("/products/:id", put(update_product).delete(delete_product))
}

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, (StatusCode, String)> {
    let products = Product::list(&state.db).await.map_err(internal)?;
    Ok(Json(products))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, (StatusCode, String)> {
    match Product::find(&state.db, id).await.map_err(internal)? {
        Some(product) => Ok(Json(product)),
        None => {
            warn!(%id, "product not found");
            Err((StatusCode::NOT_FOUND, "Product not found".into()))
        }
    }
}

#[instrument(skip(state))]
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Product>>, (StatusCode, String)> {
    let products = Product::search(&state.db, query.q.trim())
        .await
        .map_err(internal)?;
    Ok(Json(products))
}

#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), (StatusCode, String)> {
    if let Err(reason) = validate_price_and_stock(payload.price, payload.stock_quantity) {
        warn!(%reason, "create product rejected");
        return Err((StatusCode::BAD_REQUEST, reason));
    }

    let product = Product::create(
        &state.db,
        payload.name.trim(),
        payload.description.as_deref(),
        payload.price,
        payload.stock_quantity,
        payload.image_url.as_deref(),
    )
    .await
    .map_err(internal)?;

    info!(product_id = product.id, name = %product.name, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateProductRequest>,
) -> Result<Json<Product>, (StatusCode, String)> {
    if let Err(reason) = validate_price_and_stock(
        payload.price.unwrap_or_default(),
        payload.stock_quantity.unwrap_or_default(),
    ) {
        warn!(%reason, "update product rejected");
        return Err((StatusCode::BAD_REQUEST, reason));
    }

    let updated = Product::update(
        &state.db,
        id,
        payload.name.as_deref(),
        payload.description.as_deref(),
        payload.price,
        payload.stock_quantity,
        payload.image_url.as_deref(),
    )
    .await
    .map_err(internal)?;

    match updated {
        Some(product) => Ok(Json(product)),
        None => Err((StatusCode::NOT_FOUND, "Product not found".into())),
    }
}

#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, (StatusCode, String)> {
    if Product::delete(&state.db, id).await.map_err(internal)? {
        info!(%id, "product deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Product not found".into()))
    }
}
