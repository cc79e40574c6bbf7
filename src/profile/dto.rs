use serde::{Deserialize, Serialize};

use super::repo::Transaction;
use crate::users::User;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: User,
    pub points_balance: i64,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(default)]
    pub points_earned: i32,
    #[serde(default)]
    pub points_redeemed: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Points move in one direction per field; negative values would let a client
/// forge balance.
pub(crate) fn validate_points(points_earned: i32, points_redeemed: i32) -> Result<(), String> {
    if points_earned < 0 || points_redeemed < 0 {
        return Err("points_earned and points_redeemed must be non-negative".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_points_default_is_accepted() {
        let req: CreateTransactionRequest = serde_json::from_value(serde_json::json!({
            "description": "signup bonus"
        }))
        .expect("defaults should apply");
        assert_eq!(req.points_earned, 0);
        assert_eq!(req.points_redeemed, 0);
        assert!(validate_points(req.points_earned, req.points_redeemed).is_ok());
    }

    #[test]
    fn negative_points_are_rejected() {
        assert!(validate_points(-1, 0).is_err());
        assert!(validate_points(0, -5).is_err());
        assert!(validate_points(10, 5).is_ok());
    }
}
