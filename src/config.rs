//! Configuracion de la linea de comandos.
//!
//! ```bash
//! ./dalifood-insumos --orders orders.json --recipes recipes.json --date 2026-02-12 --strict
//! ```
use std::path::PathBuf;

use chrono::{ Local, NaiveDate };
use clap::Parser;
use log::LevelFilter;

use crate::{ calculator::UnknownProductPolicy, constants::{ DEFAULT_LOG_LEVEL, DEFAULT_ORDERS_PATH } };

#[derive(Debug, Clone, Parser)]
#[command(name = "dalifood-insumos")]
#[command(about = "Calcula los insumos necesarios para los pedidos de un dia de entrega")]
pub struct Config {
    /// Archivo JSON con los pedidos
    #[arg(long, default_value = DEFAULT_ORDERS_PATH, env = "INSUMOS_ORDERS")]
    pub orders: PathBuf,

    /// Archivo JSON con los factores de rendimiento. Sin el se usan los valores por defecto
    #[arg(long, env = "INSUMOS_RECIPES")]
    pub recipes: Option<PathBuf>,

    /// Archivo JSON con el catalogo de productos. Sin el se usa el catalogo incluido
    #[arg(long, env = "INSUMOS_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Fecha de entrega (YYYY-MM-DD), por defecto mañana
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Falla si un pedido referencia un producto que no esta en el catalogo
    #[arg(long)]
    pub strict: bool,

    #[arg(long, default_value = DEFAULT_LOG_LEVEL, env = "INSUMOS_LOG")]
    pub log_level: LevelFilter,
}

impl Config {
    pub fn delivery_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| {
            let today = Local::now().date_naive();
            today.succ_opt().unwrap_or(today)
        })
    }

    pub fn unknown_product_policy(&self) -> UnknownProductPolicy {
        if self.strict { UnknownProductPolicy::Fail } else { UnknownProductPolicy::Skip }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_without_arguments() {
        let config = Config::try_parse_from(["dalifood-insumos"]).expect("valid arguments");
        assert_eq!(PathBuf::from("orders.json"), config.orders);
        assert_eq!(true, config.recipes.is_none());
        assert_eq!(UnknownProductPolicy::Skip, config.unknown_product_policy());
        assert_eq!(LevelFilter::Info, config.log_level);
        assert_eq!(Local::now().date_naive() < config.delivery_date(), true);
    }

    #[test]
    fn should_parse_date_and_strict_flag() {
        let config = Config::try_parse_from([
            "dalifood-insumos",
            "--date",
            "2026-02-14",
            "--strict",
            "--log-level",
            "debug",
        ]).expect("valid arguments");
        assert_eq!(NaiveDate::from_ymd_opt(2026, 2, 14), config.date);
        assert_eq!(UnknownProductPolicy::Fail, config.unknown_product_policy());
        assert_eq!(LevelFilter::Debug, config.log_level);
    }

    #[test]
    fn should_reject_a_malformed_date() {
        let result = Config::try_parse_from(["dalifood-insumos", "--date", "14/02/2026"]);
        assert_eq!(true, result.is_err());
    }
}
