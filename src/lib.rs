//! Calculadora de insumos para la cocina: convierte los pedidos de un dia de entrega
//! en libras de arroz, presas de carne y harina para hayacas.
pub mod calculator;
pub mod config;
pub mod constants;
pub mod errors;
pub mod order;
pub mod product;
pub mod reader;
pub mod recipe;
pub mod report;
pub mod summary;

pub use calculator::{ calculate_ingredients, IngredientCalculator, UnknownProductPolicy };
pub use errors::KitchenError;
pub use order::{ Order, OrderItem, OrderStatus };
pub use product::{ Catalog, MeatComposition, Product, RiceBase };
pub use recipe::RecipeConfig;
pub use summary::IngredientSummary;
