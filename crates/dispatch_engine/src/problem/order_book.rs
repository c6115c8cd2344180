use fxhash::FxHashMap;

/// Opaque order content, carried through to the output untouched.
pub type OrderPayload = serde_json::Value;

/// Orders of one batch grouped by zone name, each group in input order.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: FxHashMap<String, Vec<OrderPayload>>,
}

impl OrderBook {
    pub fn push(&mut self, zone: impl Into<String>, order: OrderPayload) {
        self.orders.entry(zone.into()).or_default().push(order);
    }

    /// Appends after any orders already recorded for `zone`.
    pub fn extend<I>(&mut self, zone: impl Into<String>, orders: I)
    where
        I: IntoIterator<Item = OrderPayload>,
    {
        self.orders.entry(zone.into()).or_default().extend(orders);
    }

    pub fn orders_for(&self, zone: &str) -> &[OrderPayload] {
        self.orders.get(zone).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Zone names with at least one order, in no particular order.
    pub fn zones(&self) -> impl Iterator<Item = &str> {
        self.orders
            .iter()
            .filter(|(_, orders)| !orders.is_empty())
            .map(|(zone, _)| zone.as_str())
    }

    pub fn total_orders(&self) -> usize {
        self.orders.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_orders() == 0
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_extend_appends_in_input_order() {
        let mut book = OrderBook::default();
        book.push("A", json!("O1"));
        book.extend("A", vec![json!("O2"), json!(3)]);
        book.extend("B", Vec::new());

        assert_eq!(book.orders_for("A"), &[json!("O1"), json!("O2"), json!(3)]);
        assert!(book.orders_for("B").is_empty());
        assert!(book.orders_for("C").is_empty());
        assert_eq!(book.total_orders(), 3);
        assert_eq!(book.zones().collect::<Vec<_>>(), vec!["A"]);
    }
}
