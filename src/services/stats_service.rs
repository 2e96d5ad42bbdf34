//! Agregación de estadísticas
//!
//! Funciones puras sobre conjuntos de transacciones ya filtrados por el
//! repositorio. Los controladores hacen la consulta y delegan aquí el
//! cálculo.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::Transaction;

/// Suma de los precios del conjunto; 0 para un conjunto vacío
pub fn total_price(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .fold(Decimal::from(0), |total, t| total + t.price)
}

/// Media aritmética de los precios; 0 si no hay transacciones.
/// El endpoint histórico la expone como "median_price".
pub fn average_price(transactions: &[Transaction]) -> Decimal {
    if transactions.is_empty() {
        return Decimal::from(0);
    }

    total_price(transactions) / Decimal::from(transactions.len() as i64)
}

/// Tasa de pasajeros: transacciones por hora dentro de la ventana.
/// La ventana debe haberse validado como no vacía antes de llamar.
pub fn throughput_per_hour(
    count: usize,
    date_from: DateTime<Utc>,
    date_to: DateTime<Utc>,
) -> f64 {
    let hours = (date_to - date_from).num_seconds() as f64 / 3600.0;
    count as f64 / hours
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn transaction(id: i32, price: Decimal) -> Transaction {
        Transaction {
            id,
            name: format!("ticket-{}", id),
            client_type: 1,
            price,
            date: Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap(),
            bus_id: 1,
        }
    }

    #[test]
    fn test_total_price_empty_set_is_zero() {
        assert_eq!(total_price(&[]), Decimal::from(0));
    }

    #[test]
    fn test_total_price_sums_all() {
        let transactions = vec![
            transaction(1, Decimal::from(21)),
            transaction(2, Decimal::new(105, 1)),
        ];
        assert_eq!(total_price(&transactions), Decimal::new(315, 1));
    }

    #[test]
    fn test_average_price_empty_set_is_zero() {
        assert_eq!(average_price(&[]), Decimal::from(0));
    }

    #[test]
    fn test_average_price() {
        let transactions = vec![
            transaction(1, Decimal::from(20)),
            transaction(2, Decimal::from(30)),
            transaction(3, Decimal::from(40)),
        ];
        assert_eq!(average_price(&transactions), Decimal::from(30));
    }

    #[test]
    fn test_throughput_per_hour() {
        let from = Utc.with_ymd_and_hms(2024, 5, 10, 10, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();

        // 6 transacciones en 2 horas
        assert_eq!(throughput_per_hour(6, from, to), 3.0);
    }

    #[test]
    fn test_throughput_fractional_window() {
        let from = Utc.with_ymd_and_hms(2024, 5, 10, 10, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 5, 10, 10, 30, 0).unwrap();

        assert_eq!(throughput_per_hour(2, from, to), 4.0);
    }
}
