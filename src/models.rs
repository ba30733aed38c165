use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============ Receipt Models ============

/// A single purchased line item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-text description as printed on the receipt.
    #[serde(default)]
    pub short_description: String,
    /// Price as a decimal string (e.g. "6.49").
    #[serde(default)]
    pub price: String,
}

/// A submitted purchase receipt.
///
/// Every field is kept as the raw string the client sent. Parsing happens in
/// the scoring rules, where a malformed value only costs points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Server-assigned identifier. Never read from client input.
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Name of the retailer or store.
    #[serde(default)]
    pub retailer: String,
    /// Purchase date, `YYYY-MM-DD`.
    #[serde(default)]
    pub purchase_date: String,
    /// Purchase time, `HH:MM` (24-hour).
    #[serde(default)]
    pub purchase_time: String,
    /// Total amount paid as a decimal string.
    #[serde(default)]
    pub total: String,
    /// Purchased items in receipt order.
    #[serde(default)]
    pub items: Vec<Item>,
}

// ============ API Responses ============

/// Response for `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: Uuid,
}

/// Response for `GET /receipts/:id/points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_receipt_camel_case() {
        let json = r#"
        {
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
                {"shortDescription": "Emils Cheese Pizza", "price": "12.25"}
            ],
            "total": "18.74"
        }
        "#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.total, "18.74");
        assert_eq!(receipt.items.len(), 2);
        assert_eq!(receipt.items[1].short_description, "Emils Cheese Pizza");
        assert_eq!(receipt.id, None);
    }

    #[test]
    fn test_client_supplied_id_is_ignored() {
        let json = r#"{"id": "not-a-uuid", "retailer": "Walgreens"}"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.id, None);
        assert_eq!(receipt.retailer, "Walgreens");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let receipt: Receipt = serde_json::from_str("{}").unwrap();
        assert_eq!(receipt, Receipt::default());

        let item: Item = serde_json::from_str(r#"{"price": "1.00"}"#).unwrap();
        assert_eq!(item.short_description, "");
    }

    #[test]
    fn test_numeric_total_is_rejected() {
        let result = serde_json::from_str::<Receipt>(r#"{"total": 35.00}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_stored_receipt_echoes_id() {
        let id = Uuid::new_v4();
        let receipt = Receipt {
            id: Some(id),
            ..Receipt::default()
        };

        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["id"], id.to_string());
        assert_eq!(value["purchaseDate"], "");
    }
}
