//! Order Model
//!
//! Payload of `POST /waiter/orders` and the lenient view of its response.

use serde::{Deserialize, Serialize};

use super::menu::MenuEntry;
use super::seat::SeatNumber;

/// Order line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_id: i64,
    pub quantity: u32,
}

/// Order creation payload
///
/// Built fresh for every submission and dropped once the write resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub items: Vec<OrderItem>,
    pub seat: SeatNumber,
}

impl OrderRequest {
    /// One unit of `entry` for `seat`
    pub fn single(entry: &MenuEntry, seat: SeatNumber) -> Self {
        Self {
            items: vec![OrderItem {
                menu_id: entry.id(),
                quantity: 1,
            }],
            seat,
        }
    }
}

/// Order summary returned by the server, all fields optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreatedOrder {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

/// Order creation response
///
/// No field is required; a blank or non-JSON body decodes to the default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub order: Option<CreatedOrder>,
}

impl OrderReceipt {
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    pub fn order_id(&self) -> Option<i64> {
        self.order.as_ref().and_then(|o| o.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::menu::parse_menu_response;

    #[test]
    fn test_single_item_payload() {
        let entries =
            parse_menu_response(r#"{"menus":[{"id":1,"name":"Adobo","price":120.5}]}"#).unwrap();
        let seat = SeatNumber::new(3).unwrap();
        let request = OrderRequest::single(&entries[0], seat);

        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].quantity, 1);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"items":[{"menu_id":1,"quantity":1}],"seat":3}"#
        );
    }

    #[test]
    fn test_receipt_is_lenient() {
        let receipt = OrderReceipt::from_body(
            r#"{"message":"Order created","order":{"id":42,"status":"Pending","seat_number":null,"total_amount":120.5,"items":[]}}"#,
        );
        assert_eq!(receipt.order_id(), Some(42));
        assert_eq!(receipt.message.as_deref(), Some("Order created"));

        assert_eq!(OrderReceipt::from_body(""), OrderReceipt::default());
        assert_eq!(OrderReceipt::from_body("created"), OrderReceipt::default());
    }
}
