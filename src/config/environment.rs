//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de
//! configuración del servicio.

use std::env;
use std::time::Duration;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    /// Cooldown en segundos antes de reabrir un autobús reservado
    pub reopen_delay_secs: u64,
    /// Con REINIT_DB=1 el schema se recrea y se cargan los datos semilla
    pub reinit_db: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            reopen_delay_secs: env::var("REOPEN_DELAY_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("REOPEN_DELAY_SECS must be a valid number"),
            reinit_db: env::var("REINIT_DB").map(|v| v == "1").unwrap_or(false),
        }
    }
}

impl EnvironmentConfig {
    /// Retardo de reapertura como Duration
    pub fn reopen_delay(&self) -> Duration {
        Duration::from_secs(self.reopen_delay_secs)
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
