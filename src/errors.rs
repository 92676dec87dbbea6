use std::fmt;

use rust_decimal::Decimal;

#[derive(Debug, PartialEq)]
pub enum KitchenError {
    FileReaderError(String),
    InvalidRecipeFactor { factor: &'static str, value: Decimal },
    UnknownProduct { order_id: String, product_id: String },
    DuplicateProduct(String),
    QuantityOverflow,
}

impl fmt::Display for KitchenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KitchenError::FileReaderError(reason) => write!(f, "could not read input: {}", reason),
            KitchenError::InvalidRecipeFactor { factor, value } => {
                write!(f, "recipe factor {} must be greater than zero, got {}", factor, value)
            }
            KitchenError::UnknownProduct { order_id, product_id } => {
                write!(f, "order {} references unknown product {}", order_id, product_id)
            }
            KitchenError::DuplicateProduct(id) => write!(f, "product {} is listed twice", id),
            KitchenError::QuantityOverflow => write!(f, "ingredient totals overflowed"),
        }
    }
}

impl std::error::Error for KitchenError {}

impl From<std::io::Error> for KitchenError {
    fn from(error: std::io::Error) -> Self {
        KitchenError::FileReaderError(error.to_string())
    }
}

impl From<serde_json::Error> for KitchenError {
    fn from(error: serde_json::Error) -> Self {
        KitchenError::FileReaderError(error.to_string())
    }
}
