use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum OrderStatus {
    Pendiente,
    Confirmado,
    Entregado,
}

/// Linea de un pedido. `product_name` y `unit_price` son copias tomadas al crear el pedido,
/// no intervienen en el calculo de insumos.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    pub quantity: u32,
    #[serde(default)]
    pub unit_price: u64,
}

impl OrderItem {
    pub fn new(product_id: &str, quantity: u32) -> OrderItem {
        OrderItem {
            product_id: product_id.to_string(),
            product_name: String::new(),
            quantity,
            unit_price: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub client: String,
    pub delivery_date: NaiveDate,
    pub status: OrderStatus,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: &str,
        client: &str,
        delivery_date: NaiveDate,
        status: OrderStatus,
        order_items: Vec<OrderItem>
    ) -> Order {
        Order {
            id: id.to_string(),
            client: client.to_string(),
            delivery_date,
            status,
            order_items,
        }
    }

    /// Un pedido entregado ya no se produce.
    pub fn needs_production(&self) -> bool {
        self.status != OrderStatus::Entregado
    }

    /// Total del pedido segun los precios congelados en cada linea
    pub fn total_price(&self) -> u64 {
        self.order_items
            .iter()
            .map(|item| u64::from(item.quantity) * item.unit_price)
            .sum()
    }
}

/// Pedidos a producir para `date`: los que se entregan ese dia y todavia no fueron entregados.
pub fn orders_for_delivery(orders: &[Order], date: NaiveDate) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| order.delivery_date == date && order.needs_production())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, day).expect("valid date")
    }

    #[test]
    fn should_need_production_unless_delivered() {
        let pending = Order::new("ORD-001", "María López", date(12), OrderStatus::Pendiente, vec![]);
        let confirmed = Order::new("ORD-006", "Jorge Díaz", date(12), OrderStatus::Confirmado, vec![]);
        let delivered = Order::new("ORD-004", "Luis Méndez", date(11), OrderStatus::Entregado, vec![]);
        assert_eq!(true, pending.needs_production());
        assert_eq!(true, confirmed.needs_production());
        assert_eq!(false, delivered.needs_production());
    }

    #[test]
    fn should_select_only_undelivered_orders_of_the_day() {
        let orders = vec![
            Order::new("ORD-001", "María López", date(12), OrderStatus::Pendiente, vec![]),
            Order::new("ORD-002", "Carlos Ruiz", date(13), OrderStatus::Confirmado, vec![]),
            Order::new("ORD-006", "Jorge Díaz", date(12), OrderStatus::Confirmado, vec![]),
            Order::new("ORD-007", "Paula Gómez", date(12), OrderStatus::Entregado, vec![])
        ];
        let selected: Vec<String> = orders_for_delivery(&orders, date(12))
            .into_iter()
            .map(|order| order.id)
            .collect();
        assert_eq!(vec!["ORD-001".to_string(), "ORD-006".to_string()], selected);
    }

    #[test]
    fn should_compute_the_total_with_snapshot_prices() {
        let mut hayacas = OrderItem::new("hayaca", 12);
        hayacas.unit_price = 15000;
        let mut pasteles = OrderItem::new("pastel_pollo", 4);
        pasteles.unit_price = 12000;
        let order = Order::new(
            "ORD-002",
            "Carlos Ruiz",
            date(13),
            OrderStatus::Confirmado,
            vec![hayacas, pasteles]
        );
        assert_eq!(228000, order.total_price());
    }

    #[test]
    fn should_deserialize_an_order() {
        let json =
            r#"{ "id": "ORD-003", "client": "Ana Torres", "deliveryDate": "2026-02-14",
                 "status": "Pendiente",
                 "orderItems": [{ "productId": "pastel_pollo", "productName": "Pastel de Pollo",
                                  "quantity": 3, "unitPrice": 12000 }] }"#;
        let order: Order = serde_json::from_str(json).expect("valid order");
        assert_eq!(date(14), order.delivery_date);
        assert_eq!(OrderStatus::Pendiente, order.status);
        assert_eq!(1, order.order_items.len());
        assert_eq!(36000, order.total_price());
    }

    #[test]
    fn should_reject_a_negative_quantity() {
        let json = r#"{ "productId": "hayaca", "quantity": -2 }"#;
        let result: Result<OrderItem, _> = serde_json::from_str(json);
        assert_eq!(true, result.is_err());
    }
}
