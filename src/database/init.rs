//! Schema y datos semilla
//!
//! Crea las tablas del servicio y, cuando se recrea el schema, carga las
//! categorías de cliente y los autobuses iniciales.

use rust_decimal::Decimal;
use sqlx::PgPool;

/// Categorías de cliente iniciales: (nombre, descuento en %)
const DEFAULT_CLIENT_TYPES: &[(&str, i32)] = &[
    ("Pensionistas", 30),
    ("Estudiantes", 15),
    ("General", 0),
    ("Abono", 10),
    ("Discapacitados", 70),
];

/// Crear las tablas si no existen
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS client_types (
            id SERIAL PRIMARY KEY,
            client_name TEXT NOT NULL UNIQUE,
            discount INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS buses (
            id SERIAL PRIMARY KEY,
            price NUMERIC NOT NULL,
            status BOOLEAN NOT NULL DEFAULT TRUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS transactions (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            client_type INTEGER NOT NULL REFERENCES client_types(id),
            price NUMERIC NOT NULL,
            date TIMESTAMPTZ NOT NULL,
            bus_id INTEGER NOT NULL REFERENCES buses(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Recrear el schema desde cero y cargar los datos semilla
pub async fn reinit_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    log::warn!("REINIT_DB=1: recreando el schema, se pierden todos los datos");

    sqlx::query("DROP TABLE IF EXISTS transactions").execute(pool).await?;
    sqlx::query("DROP TABLE IF EXISTS buses").execute(pool).await?;
    sqlx::query("DROP TABLE IF EXISTS client_types").execute(pool).await?;

    init_schema(pool).await?;
    seed_defaults(pool).await?;

    Ok(())
}

/// Cargar las categorías y autobuses iniciales
async fn seed_defaults(pool: &PgPool) -> Result<(), sqlx::Error> {
    for (client_name, discount) in DEFAULT_CLIENT_TYPES {
        sqlx::query(
            "INSERT INTO client_types (client_name, discount) VALUES ($1, $2)
             ON CONFLICT (client_name) DO NOTHING",
        )
        .bind(client_name)
        .bind(discount)
        .execute(pool)
        .await?;
    }

    // Cuatro autobuses abiertos con precios 30-33
    for i in 0..4 {
        sqlx::query("INSERT INTO buses (price, status) VALUES ($1, TRUE)")
            .bind(Decimal::from(30 + i))
            .execute(pool)
            .await?;
    }

    log::info!(
        "Datos semilla cargados: {} categorías de cliente, 4 autobuses",
        DEFAULT_CLIENT_TYPES.len()
    );

    Ok(())
}
