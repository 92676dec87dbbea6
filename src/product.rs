//! Catalogo de productos vendibles y su composicion de insumos.
use std::collections::HashMap;

use serde::Deserialize;

use crate::errors::KitchenError;

/// Arroz adobado que consume cada unidad del producto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiceBase {
    Chicken,
    Pork,
    None,
}

/// Presas de cada carne que lleva una unidad del producto
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct MeatComposition {
    #[serde(default)]
    pub chicken: u32,
    #[serde(default)]
    pub pork: u32,
}

impl MeatComposition {
    pub fn new(chicken: u32, pork: u32) -> MeatComposition {
        MeatComposition { chicken, pork }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: u64,
    #[serde(default = "default_active")]
    pub active: bool,
    pub rice_base: RiceBase,
    #[serde(default)]
    pub meat_composition: MeatComposition,
    #[serde(default)]
    pub is_hayaca: bool,
}

fn default_active() -> bool {
    true
}

impl Product {
    /// Crea un pastel: lleva arroz de `rice_base` y las presas indicadas.
    pub fn pastel(
        id: &str,
        name: &str,
        price: u64,
        rice_base: RiceBase,
        meat_composition: MeatComposition
    ) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            active: true,
            rice_base,
            meat_composition,
            is_hayaca: false,
        }
    }

    /// Crea una hayaca: solo consume harina.
    pub fn hayaca(id: &str, name: &str, price: u64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            active: true,
            rice_base: RiceBase::None,
            meat_composition: MeatComposition::default(),
            is_hayaca: true,
        }
    }
}

/// Catalogo indexado por id. Los productos inactivos se siguen resolviendo,
/// solo se ocultan en `active_products`.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Catalog, KitchenError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id.clone(), position).is_some() {
                return Err(KitchenError::DuplicateProduct(product.id.clone()));
            }
        }
        Ok(Catalog { products, index })
    }

    pub fn resolve(&self, product_id: &str) -> Option<&Product> {
        self.index.get(product_id).and_then(|position| self.products.get(*position))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn active_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|product| product.active)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let products = vec![
            Product::hayaca("hayaca", "Hayaca", 15000),
            Product::pastel(
                "pastel_pollo",
                "Pastel de Pollo",
                12000,
                RiceBase::Chicken,
                MeatComposition::new(1, 0)
            ),
            Product::pastel(
                "pastel_cerdo",
                "Pastel de Cerdo",
                12000,
                RiceBase::Pork,
                MeatComposition::new(0, 1)
            ),
            Product::pastel(
                "pastel_mixto",
                "Pastel Mixto",
                14000,
                RiceBase::Pork,
                MeatComposition::new(1, 1)
            )
        ];
        let index = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id.clone(), position))
            .collect();
        Catalog { products, index }
    }
}
