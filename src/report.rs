//! Reporte de insumos en texto plano, con las mismas secciones que la calculadora de la cocina.
use chrono::NaiveDate;

use crate::{ order::Order, recipe::RecipeConfig, summary::IngredientSummary };

pub struct IngredientReport<'a> {
    date: NaiveDate,
    orders: &'a [Order],
    summary: &'a IngredientSummary,
    config: &'a RecipeConfig,
}

impl<'a> IngredientReport<'a> {
    pub fn new(
        date: NaiveDate,
        orders: &'a [Order],
        summary: &'a IngredientSummary,
        config: &'a RecipeConfig
    ) -> IngredientReport<'a> {
        IngredientReport { date, orders, summary, config }
    }

    pub fn render(&self) -> String {
        let mut report = format!(
            "Calculadora de Insumos | {} | {} pedidos pendientes\n",
            self.date.format("%Y-%m-%d"),
            self.orders.len()
        );
        self.add_rice_section(&mut report);
        self.add_meat_section(&mut report);
        if self.summary.total_hayacas > 0 {
            self.add_flour_section(&mut report);
        }
        self.add_orders_section(&mut report);
        report
    }

    fn add_rice_section(&self, report: &mut String) {
        report.push_str(
            &format!(
                "[ARROCES] Pollo={} Lb | Cerdo={} Lb\n",
                self.summary.chicken_rice_lbs,
                self.summary.pork_rice_lbs
            )
        );
        report.push_str(
            &format!(
                "           Factor: {} Lb/pastel, {} pasteles totales\n",
                self.config.rice_factor,
                self.summary.total_pastries
            )
        );
    }

    fn add_meat_section(&self, report: &mut String) {
        report.push_str(
            &format!(
                "[PRESAS] Pollo={} unidades | Cerdo={} unidades\n",
                self.summary.chicken_pieces,
                self.summary.pork_pieces
            )
        );
    }

    fn add_flour_section(&self, report: &mut String) {
        report.push_str(
            &format!(
                "[HARINA] {} hayacas a producir: {} Lb ({} bolsas de 1kg)\n",
                self.summary.total_hayacas,
                self.summary.flour_lbs,
                self.summary.flour_bags
            )
        );
        report.push_str(
            &format!(
                "          Rendimiento: {} hayacas/Lb, {} hayacas/bolsa\n",
                self.config.flour_per_pound,
                self.config.flour_per_bag
            )
        );
    }

    fn add_orders_section(&self, report: &mut String) {
        report.push_str("[PEDIDOS]\n");
        for order in self.orders {
            let items: Vec<String> = order.order_items
                .iter()
                .map(|item| {
                    let name = if item.product_name.is_empty() {
                        &item.product_id
                    } else {
                        &item.product_name
                    };
                    format!("{} {}", item.quantity, name)
                })
                .collect();
            report.push_str(&format!("  {} {}: {}\n", order.id, order.client, items.join(", ")));
        }
    }
}
