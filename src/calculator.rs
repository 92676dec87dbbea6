//! Calculadora de insumos. Convierte los pedidos a producir en arroz, presas y harina.
use log::{ debug, info, warn };

use crate::{
    errors::KitchenError,
    order::{ Order, OrderItem },
    product::{ Catalog, Product },
    recipe::RecipeConfig,
    summary::{ IngredientSummary, IngredientTotals },
};

/// Que hacer con una linea cuyo producto no esta en el catalogo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownProductPolicy {
    /// La linea no aporta nada, se deja registrado en el log
    #[default]
    Skip,
    /// El calculo falla con `KitchenError::UnknownProduct`
    Fail,
}

/// Calculadora ligada a un catalogo y una configuracion de recetas ya validada.
/// No guarda estado entre calculos.
pub struct IngredientCalculator<'a> {
    catalog: &'a Catalog,
    config: &'a RecipeConfig,
    policy: UnknownProductPolicy,
}

impl<'a> IngredientCalculator<'a> {
    pub fn new(
        catalog: &'a Catalog,
        config: &'a RecipeConfig
    ) -> Result<IngredientCalculator<'a>, KitchenError> {
        config.validate()?;
        Ok(IngredientCalculator {
            catalog,
            config,
            policy: UnknownProductPolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: UnknownProductPolicy) -> IngredientCalculator<'a> {
        self.policy = policy;
        self
    }

    /// Suma los insumos de todos los pedidos recibidos. No filtra por fecha ni estado:
    /// eso lo hace quien llama (ver `orders_for_delivery`).
    pub fn calculate(&self, orders: &[Order]) -> Result<IngredientSummary, KitchenError> {
        let mut totals = IngredientTotals::default();
        for order in orders {
            for item in &order.order_items {
                if let Some(product) = self.resolve(order, item)? {
                    debug!(
                        "[CALCULATOR] Order {} adds {} of {}",
                        order.id,
                        item.quantity,
                        product.id
                    );
                    totals.add(product, item.quantity)?;
                }
            }
        }

        let summary = IngredientSummary::from_totals(&totals, self.config)?;
        info!(
            "[CALCULATOR] {} orders need {} hayacas and {} pastries",
            orders.len(),
            summary.total_hayacas,
            summary.total_pastries
        );
        Ok(summary)
    }

    fn resolve(&self, order: &Order, item: &OrderItem) -> Result<Option<&'a Product>, KitchenError> {
        match self.catalog.resolve(&item.product_id) {
            Some(product) => Ok(Some(product)),
            None =>
                match self.policy {
                    UnknownProductPolicy::Skip => {
                        warn!(
                            "[CALCULATOR] Skipped item of order {}, unknown product {}",
                            order.id,
                            item.product_id
                        );
                        Ok(None)
                    }
                    UnknownProductPolicy::Fail =>
                        Err(KitchenError::UnknownProduct {
                            order_id: order.id.clone(),
                            product_id: item.product_id.clone(),
                        }),
                }
        }
    }
}

/// Calcula los insumos de `orders` ignorando las lineas con productos desconocidos.
pub fn calculate_ingredients(
    orders: &[Order],
    catalog: &Catalog,
    config: &RecipeConfig
) -> Result<IngredientSummary, KitchenError> {
    IngredientCalculator::new(catalog, config)?.calculate(orders)
}
