use serde::{Deserialize, Serialize};
use sqlx::types::Decimal;

use super::repo::CartLine;

#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub quantity: i32,
    pub cart_id: i32,
}

#[derive(Debug, Serialize)]
pub struct CartView {
    pub cart_id: i32,
    pub items: Vec<CartLine>,
    pub total: Decimal,
}

impl CartView {
    pub fn new(cart_id: i32, items: Vec<CartLine>) -> Self {
        let total = items
            .iter()
            .map(|line| line.price * Decimal::from(line.quantity))
            .sum();
        Self {
            cart_id,
            items,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: i32, price: Decimal, quantity: i32) -> CartLine {
        CartLine {
            product_id,
            name: format!("product-{product_id}"),
            price,
            quantity,
        }
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let view = CartView::new(
            7,
            vec![
                line(1, Decimal::new(1050, 2), 2), // 21.00
                line(2, Decimal::new(399, 2), 3),  // 11.97
            ],
        );
        assert_eq!(view.total, Decimal::new(3297, 2));
    }

    #[test]
    fn empty_cart_totals_zero() {
        let view = CartView::new(7, vec![]);
        assert_eq!(view.total, Decimal::ZERO);
        assert!(view.items.is_empty());
    }
}
