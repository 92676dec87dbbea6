//! Lectura de los archivos JSON de entrada: pedidos, catalogo y recetas.
use std::fs::File;
use std::io::{ BufReader, Read };
use std::path::Path;

use log::{ debug, info };
use serde::{ de::DeserializeOwned, Deserialize };

use crate::{
    errors::KitchenError,
    order::Order,
    product::{ Catalog, Product },
    recipe::RecipeConfig,
};

#[derive(Deserialize)]
struct OrdersFile {
    orders: Vec<Order>,
}

#[derive(Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

fn open<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, KitchenError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|error| {
        KitchenError::FileReaderError(format!("{}: {}", path.display(), error))
    })?;
    Ok(BufReader::new(file))
}

fn decode<T: DeserializeOwned, R: Read>(reader: R) -> Result<T, KitchenError> {
    let value = serde_json::from_reader(reader)?;
    Ok(value)
}

pub fn orders_from_reader<R: Read>(reader: R) -> Result<Vec<Order>, KitchenError> {
    let file: OrdersFile = decode(reader)?;
    for order in &file.orders {
        debug!("[READER] Read order {} with {} items", order.id, order.order_items.len());
    }
    Ok(file.orders)
}

pub fn catalog_from_reader<R: Read>(reader: R) -> Result<Catalog, KitchenError> {
    let file: CatalogFile = decode(reader)?;
    Catalog::new(file.products)
}

pub fn recipe_config_from_reader<R: Read>(reader: R) -> Result<RecipeConfig, KitchenError> {
    let config: RecipeConfig = decode(reader)?;
    config.validate()?;
    Ok(config)
}

pub fn read_orders<P: AsRef<Path>>(path: P) -> Result<Vec<Order>, KitchenError> {
    let orders = orders_from_reader(open(&path)?)?;
    info!("[READER] Read {} orders from {}", orders.len(), path.as_ref().display());
    Ok(orders)
}

pub fn read_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, KitchenError> {
    let catalog = catalog_from_reader(open(&path)?)?;
    info!("[READER] Read {} products from {}", catalog.len(), path.as_ref().display());
    Ok(catalog)
}

pub fn read_recipe_config<P: AsRef<Path>>(path: P) -> Result<RecipeConfig, KitchenError> {
    let config = recipe_config_from_reader(open(&path)?)?;
    info!("[READER] Read recipe config from {}", path.as_ref().display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderStatus;
    use rust_decimal::Decimal;

    #[test]
    fn should_read_orders_with_items() {
        let json =
            r#"{ "orders": [
                { "id": "ORD-001", "client": "María López", "deliveryDate": "2026-02-12",
                  "status": "Pendiente", "orderItems": [{ "productId": "hayaca", "quantity": 6 }] },
                { "id": "ORD-004", "client": "Luis Méndez", "deliveryDate": "2026-02-11",
                  "status": "Entregado" }
            ] }"#;
        let orders = orders_from_reader(json.as_bytes()).expect("valid orders");
        assert_eq!(2, orders.len());
        assert_eq!(6, orders[0].order_items[0].quantity);
        assert_eq!(OrderStatus::Entregado, orders[1].status);
        assert_eq!(true, orders[1].order_items.is_empty());
    }

    #[test]
    fn should_fail_with_a_reader_error_on_malformed_json() {
        let result = orders_from_reader("{ \"orders\": [".as_bytes());
        assert_eq!(true, matches!(result, Err(KitchenError::FileReaderError(_))));
    }

    #[test]
    fn should_fail_when_the_file_does_not_exist() {
        let result = read_orders("this/file/does/not/exist.json");
        assert_eq!(true, matches!(result, Err(KitchenError::FileReaderError(_))));
    }

    #[test]
    fn should_read_a_catalog() {
        let json =
            r#"{ "products": [
                { "id": "hayaca", "name": "Hayaca", "price": 15000, "riceBase": "none", "isHayaca": true },
                { "id": "pastel_mixto", "name": "Pastel Mixto", "price": 14000, "riceBase": "pork",
                  "meatComposition": { "chicken": 1, "pork": 1 } }
            ] }"#;
        let catalog = catalog_from_reader(json.as_bytes()).expect("valid catalog");
        assert_eq!(2, catalog.len());
        assert_eq!(true, catalog.resolve("hayaca").map_or(false, |p| p.is_hayaca));
    }

    #[test]
    fn should_reject_a_recipe_config_with_a_zero_factor() {
        let json = r#"{ "riceFactor": 0.294, "flourPerPound": 16, "flourPerBag": 0 }"#;
        let result = recipe_config_from_reader(json.as_bytes());
        assert_eq!(
            Err(KitchenError::InvalidRecipeFactor { factor: "flourPerBag", value: Decimal::ZERO }),
            result
        );
    }
}
