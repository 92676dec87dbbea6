//! Resumen de insumos: lo que hay que comprar y preparar para un conjunto de pedidos.
use rust_decimal::{ Decimal, RoundingStrategy };
use serde::Serialize;

use crate::{
    constants::REPORTED_DECIMALS,
    errors::KitchenError,
    product::{ Product, RiceBase },
    recipe::RecipeConfig,
};

/// Acumuladores en unidades de producto, antes de aplicar los factores de la receta.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngredientTotals {
    pub chicken_rice_units: u64,
    pub pork_rice_units: u64,
    pub chicken_pieces: u64,
    pub pork_pieces: u64,
    pub total_hayacas: u64,
    pub total_pastries: u64,
}

impl IngredientTotals {
    /// Suma el aporte de `quantity` unidades de `product`.
    /// Una hayaca solo suma hayacas, aunque tenga arroz o presas cargadas.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<(), KitchenError> {
        let quantity = u64::from(quantity);
        if product.is_hayaca {
            self.total_hayacas = checked_add(self.total_hayacas, quantity)?;
            return Ok(());
        }

        match product.rice_base {
            RiceBase::Chicken => {
                self.chicken_rice_units = checked_add(self.chicken_rice_units, quantity)?;
            }
            RiceBase::Pork => {
                self.pork_rice_units = checked_add(self.pork_rice_units, quantity)?;
            }
            RiceBase::None => {}
        }

        let composition = product.meat_composition;
        self.chicken_pieces = checked_add(
            self.chicken_pieces,
            checked_mul(quantity, composition.chicken)?
        )?;
        self.pork_pieces = checked_add(self.pork_pieces, checked_mul(quantity, composition.pork)?)?;
        self.total_pastries = checked_add(self.total_pastries, quantity)?;
        Ok(())
    }
}

fn checked_add(total: u64, amount: u64) -> Result<u64, KitchenError> {
    total.checked_add(amount).ok_or(KitchenError::QuantityOverflow)
}

fn checked_mul(quantity: u64, pieces: u32) -> Result<u64, KitchenError> {
    quantity.checked_mul(u64::from(pieces)).ok_or(KitchenError::QuantityOverflow)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSummary {
    pub chicken_rice_lbs: Decimal,
    pub pork_rice_lbs: Decimal,
    pub chicken_pieces: u64,
    pub pork_pieces: u64,
    pub total_hayacas: u64,
    pub flour_lbs: Decimal,
    pub flour_bags: Decimal,
    /// Unidades que no son hayacas (pasteles)
    pub total_pastries: u64,
}

impl IngredientSummary {
    pub fn empty() -> IngredientSummary {
        IngredientSummary {
            chicken_rice_lbs: Decimal::ZERO,
            pork_rice_lbs: Decimal::ZERO,
            chicken_pieces: 0,
            pork_pieces: 0,
            total_hayacas: 0,
            flour_lbs: Decimal::ZERO,
            flour_bags: Decimal::ZERO,
            total_pastries: 0,
        }
    }

    /// Aplica los factores de `config` a los totales. Libras y bolsas se redondean hacia arriba
    /// a dos decimales; la harina en libras y en bolsas se calcula cada una desde las hayacas.
    pub fn from_totals(
        totals: &IngredientTotals,
        config: &RecipeConfig
    ) -> Result<IngredientSummary, KitchenError> {
        Ok(IngredientSummary {
            chicken_rice_lbs: rice_pounds(totals.chicken_rice_units, config)?,
            pork_rice_lbs: rice_pounds(totals.pork_rice_units, config)?,
            chicken_pieces: totals.chicken_pieces,
            pork_pieces: totals.pork_pieces,
            total_hayacas: totals.total_hayacas,
            flour_lbs: flour_units(totals.total_hayacas, config.flour_per_pound)?,
            flour_bags: flour_units(totals.total_hayacas, config.flour_per_bag)?,
            total_pastries: totals.total_pastries,
        })
    }
}

fn rice_pounds(units: u64, config: &RecipeConfig) -> Result<Decimal, KitchenError> {
    let pounds = Decimal::from(units)
        .checked_mul(config.rice_factor)
        .ok_or(KitchenError::QuantityOverflow)?;
    Ok(round_up(pounds))
}

fn flour_units(hayacas: u64, hayacas_per_unit: Decimal) -> Result<Decimal, KitchenError> {
    if hayacas == 0 {
        return Ok(Decimal::ZERO);
    }
    let units = Decimal::from(hayacas)
        .checked_div(hayacas_per_unit)
        .ok_or(KitchenError::QuantityOverflow)?;
    Ok(round_up(units))
}

/// Nunca se redondea para abajo: es preferible que sobre un poco de insumo a que falte.
pub fn round_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(REPORTED_DECIMALS, RoundingStrategy::ToPositiveInfinity)
}
