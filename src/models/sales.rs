use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single historical order line shown in the sales history table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub id: u32,
    pub product_name: String,
    pub order_date: NaiveDate,
    /// Order value in dollars, never negative
    pub sales: Decimal,
    pub order_city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl SalesRecord {
    pub fn new(
        id: u32,
        product_name: impl Into<String>,
        order_date: NaiveDate,
        sales: Decimal,
        order_city: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            product_name: product_name.into(),
            order_date,
            sales: sales.max(Decimal::ZERO),
            order_city: order_city.into(),
            latitude,
            longitude,
        }
    }
}

/// Distinct product names in the order they first appear.
pub fn unique_products(records: &[SalesRecord]) -> Vec<String> {
    let mut products: Vec<String> = Vec::new();
    for record in records {
        if !products.iter().any(|p| p == &record.product_name) {
            products.push(record.product_name.clone());
        }
    }
    products
}

/// Records belonging to one product, in their original order.
pub fn records_for_product<'a>(
    records: &'a [SalesRecord],
    product_name: &str,
) -> Vec<&'a SalesRecord> {
    records
        .iter()
        .filter(|r| r.product_name == product_name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(id: u32, product: &str) -> SalesRecord {
        SalesRecord::new(
            id,
            product,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            dec!(100),
            "Chicago",
            41.8781,
            -87.6298,
        )
    }

    #[test]
    fn unique_products_keeps_first_seen_order() {
        let records = vec![
            record(1, "Tablet Z"),
            record(2, "Laptop Pro X"),
            record(3, "Tablet Z"),
            record(4, "Smartphone Y"),
        ];

        assert_eq!(
            unique_products(&records),
            vec!["Tablet Z", "Laptop Pro X", "Smartphone Y"]
        );
    }

    #[test]
    fn unique_products_of_empty_history_is_empty() {
        assert!(unique_products(&[]).is_empty());
    }

    #[test]
    fn negative_sales_are_clamped_to_zero() {
        let r = SalesRecord::new(
            9,
            "Refund",
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            dec!(-25.50),
            "Boston",
            42.3601,
            -71.0589,
        );
        assert_eq!(r.sales, Decimal::ZERO);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(record(1, "Tablet Z")).unwrap();
        assert_eq!(json["productName"], "Tablet Z");
        assert_eq!(json["orderDate"], "2024-01-15");
        assert_eq!(json["orderCity"], "Chicago");
    }

    #[test]
    fn filters_records_by_product() {
        let records = vec![record(1, "A"), record(2, "B"), record(3, "A")];
        let ids: Vec<u32> = records_for_product(&records, "A")
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
