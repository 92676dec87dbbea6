//! Parametros de configuracion de la calculadora de insumos

/// Libras de arroz por cada pastel, expresado como mantisa y escala (0.294)
pub const RICE_FACTOR_MANTISSA: i64 = 294;
pub const RICE_FACTOR_SCALE: u32 = 3;

/// Cantidad de hayacas que rinde una libra de harina
pub const HAYACAS_PER_FLOUR_POUND: u32 = 16;

/// Cantidad de hayacas que rinde una bolsa de harina de 1kg
pub const HAYACAS_PER_FLOUR_BAG: u32 = 32;

/// Cantidad de decimales con la que se reportan las libras y bolsas.
/// Siempre se redondea hacia arriba.
pub const REPORTED_DECIMALS: u32 = 2;

/// Archivo de pedidos por defecto
pub const DEFAULT_ORDERS_PATH: &str = "orders.json";

/// Nivel de log por defecto
pub const DEFAULT_LOG_LEVEL: &str = "info";
