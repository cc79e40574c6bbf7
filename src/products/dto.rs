use serde::Deserialize;
use sqlx::types::Decimal;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub stock_quantity: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Price and stock must be non-negative before a row is written.
pub(crate) fn validate_price_and_stock(price: Decimal, stock_quantity: i32) -> Result<(), String> {
    if price.is_sign_negative() {
        return Err("price must be non-negative".into());
    }
    if stock_quantity < 0 {
        return Err("stock_quantity must be non-negative".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_negative_price_and_stock() {
        assert!(validate_price_and_stock(Decimal::new(1999, 2), 10).is_ok());
        assert!(validate_price_and_stock(Decimal::ZERO, 0).is_ok());
    }

    #[test]
    fn rejects_negative_price() {
        let err = validate_price_and_stock(Decimal::new(-1, 0), 5).unwrap_err();
        assert!(err.contains("price"));
    }

    #[test]
    fn rejects_negative_stock() {
        let err = validate_price_and_stock(Decimal::ONE, -1).unwrap_err();
        assert!(err.contains("stock_quantity"));
    }

    #[test]
    fn create_request_parses_price_from_number_or_string() {
        let from_number: CreateProductRequest =
            serde_json::from_value(serde_json::json!({
                "name": "Mug",
                "price": 12.5,
                "stock_quantity": 3
            }))
            .expect("numeric price should parse");
        assert_eq!(from_number.price, Decimal::new(125, 1));

        let from_string: CreateProductRequest =
            serde_json::from_value(serde_json::json!({
                "name": "Mug",
                "price": "12.50",
                "stock_quantity": 3
            }))
            .expect("string price should parse");
        assert_eq!(from_string.price, Decimal::new(1250, 2));
    }
}
