//! Política de precios
//!
//! El precio cobrado es el precio base del autobús con el descuento
//! porcentual de la categoría aplicado, en aritmética decimal exacta.
//! Es una función pura; los errores de entidad ausente pertenecen al
//! que la llama.

use rust_decimal::Decimal;

/// `base_price * (100 - discount_percent) / 100`
pub fn compute_price(base_price: Decimal, discount_percent: i32) -> Decimal {
    base_price * Decimal::from(100 - discount_percent) / Decimal::from(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_applied() {
        let price = compute_price(Decimal::from(30), 30);
        assert_eq!(price, Decimal::from(21));
    }

    #[test]
    fn test_zero_discount_keeps_base_price() {
        let base = Decimal::new(4550, 2);
        assert_eq!(compute_price(base, 0), base);
    }

    #[test]
    fn test_full_discount_is_free() {
        assert_eq!(compute_price(Decimal::from(30), 100), Decimal::from(0));
    }

    #[test]
    fn test_fractional_result_is_exact() {
        // 10 * 85 / 100 = 8.5, sin redondeo binario
        let price = compute_price(Decimal::from(10), 15);
        assert_eq!(price, Decimal::new(85, 1));
    }
}
