use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// Catalog entry only; redeeming is recorded as a Transaction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reward {
    pub id: i32,
    pub name: String,
    pub points_required: i32,
    pub description: Option<String>,
    pub expiry_date: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: i32,
    pub user_id: i32,
    pub points_earned: i32,
    pub points_redeemed: i32,
    pub description: Option<String>,
    pub created_at: OffsetDateTime,
}

impl Reward {
    pub async fn list(db: &PgPool) -> anyhow::Result<Vec<Reward>> {
        let rows = sqlx::query_as::<_, Reward>(
            r#"
            SELECT id, name, points_required, description, expiry_date
            FROM rewards
            ORDER BY points_required
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}

impl Transaction {
    pub async fn list_by_user(db: &PgPool, user_id: i32, limit: i64) -> anyhow::Result<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, user_id, points_earned, points_redeemed, description, created_at
            FROM transactions
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        user_id: i32,
        points_earned: i32,
        points_redeemed: i32,
        description: Option<&str>,
    ) -> anyhow::Result<Transaction> {
        let row = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (user_id, points_earned, points_redeemed, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, points_earned, points_redeemed, description, created_at
            "#,
        )
        .bind(user_id)
        .bind(points_earned)
        .bind(points_redeemed)
        .bind(description)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// Net points over the whole ledger for a user.
    pub async fn balance(db: &PgPool, user_id: i32) -> anyhow::Result<i64> {
        let balance: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(points_earned - points_redeemed), 0)
            FROM transactions
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(db)
        .await?;
        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn reward_serializes_with_documented_field_names() {
        let reward = Reward {
            id: 1,
            name: "Free coffee".into(),
            points_required: 250,
            description: Some("One free coffee of any size".into()),
            expiry_date: Some(datetime!(2027-01-01 0:00 UTC)),
        };

        let value = serde_json::to_value(&reward).expect("serialize reward");
        let obj = value.as_object().expect("reward is a json object");
        for key in ["id", "name", "points_required", "description", "expiry_date"] {
            assert!(obj.contains_key(key), "missing field {key}");
        }
        assert_eq!(obj.len(), 5);
        assert_eq!(obj["points_required"], 250);
    }

    #[test]
    fn transaction_serializes_with_documented_field_names() {
        let transaction = Transaction {
            id: 7,
            user_id: 3,
            points_earned: 100,
            points_redeemed: 40,
            description: None,
            created_at: datetime!(2026-06-01 12:00 UTC),
        };

        let value = serde_json::to_value(&transaction).expect("serialize transaction");
        let obj = value.as_object().expect("transaction is a json object");
        for key in [
            "id",
            "user_id",
            "points_earned",
            "points_redeemed",
            "description",
            "created_at",
        ] {
            assert!(obj.contains_key(key), "missing field {key}");
        }
        assert_eq!(obj.len(), 6);
        assert_eq!(obj["points_earned"], 100);
        assert_eq!(obj["points_redeemed"], 40);
        assert!(obj["description"].is_null());
    }
}
