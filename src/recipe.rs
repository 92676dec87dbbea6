//! Factores de rendimiento usados para convertir pedidos en insumos.
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    constants::{
        HAYACAS_PER_FLOUR_BAG,
        HAYACAS_PER_FLOUR_POUND,
        RICE_FACTOR_MANTISSA,
        RICE_FACTOR_SCALE,
    },
    errors::KitchenError,
};

/// Configuracion de recetas. Las claves faltantes en el JSON toman el valor por defecto.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeConfig {
    /// Libras de arroz por cada unidad que lleva arroz
    pub rice_factor: Decimal,
    /// Hayacas que rinde una libra de harina
    pub flour_per_pound: Decimal,
    /// Hayacas que rinde una bolsa de 1kg
    pub flour_per_bag: Decimal,
}

impl RecipeConfig {
    pub fn new(rice_factor: Decimal, flour_per_pound: Decimal, flour_per_bag: Decimal) -> Self {
        RecipeConfig { rice_factor, flour_per_pound, flour_per_bag }
    }

    /// Todos los factores tienen que ser estrictamente positivos.
    pub fn validate(&self) -> Result<(), KitchenError> {
        check_positive("riceFactor", self.rice_factor)?;
        check_positive("flourPerPound", self.flour_per_pound)?;
        check_positive("flourPerBag", self.flour_per_bag)?;
        Ok(())
    }
}

fn check_positive(factor: &'static str, value: Decimal) -> Result<(), KitchenError> {
    if value <= Decimal::ZERO {
        return Err(KitchenError::InvalidRecipeFactor { factor, value });
    }
    Ok(())
}

impl Default for RecipeConfig {
    fn default() -> Self {
        RecipeConfig {
            rice_factor: Decimal::new(RICE_FACTOR_MANTISSA, RICE_FACTOR_SCALE),
            flour_per_pound: Decimal::from(HAYACAS_PER_FLOUR_POUND),
            flour_per_bag: Decimal::from(HAYACAS_PER_FLOUR_BAG),
        }
    }
}
