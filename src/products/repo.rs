use serde::{Deserialize, Serialize};
use sqlx::{types::Decimal, FromRow, PgPool};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub image_url: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Product {
    pub async fn list(db: &PgPool) -> anyhow::Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, stock_quantity, image_url, created_at, updated_at
            FROM products
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find(db: &PgPool, id: i32) -> anyhow::Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, stock_quantity, image_url, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(product)
    }

    pub async fn create(
        db: &PgPool,
        name: &str,
        description: Option<&str>,
        price: Decimal,
        stock_quantity: i32,
        image_url: Option<&str>,
    ) -> anyhow::Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price, stock_quantity, image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, stock_quantity, image_url, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(stock_quantity)
        .bind(image_url)
        .fetch_one(db)
        .await?;
        Ok(product)
    }

    /// Partial update: absent fields keep their current value.
    pub async fn update(
        db: &PgPool,
        id: i32,
        name: Option<&str>,
        description: Option<&str>,
        price: Option<Decimal>,
        stock_quantity: Option<i32>,
        image_url: Option<&str>,
    ) -> anyhow::Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                stock_quantity = COALESCE($5, stock_quantity),
                image_url = COALESCE($6, image_url),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, description, price, stock_quantity, image_url, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(stock_quantity)
        .bind(image_url)
        .fetch_optional(db)
        .await?;
        Ok(product)
    }

    pub async fn delete(db: &PgPool, id: i32) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn search(db: &PgPool, term: &str) -> anyhow::Result<Vec<Product>> {
        let pattern = format!("%{}%", term);
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, stock_quantity, image_url, created_at, updated_at
            FROM products
            WHERE name ILIKE $1 OR description ILIKE $1
            ORDER BY name
            "#,
        )
        .bind(pattern)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
