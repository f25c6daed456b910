//! Menu Model
//!
//! Menu entries arrive from `GET /waiter/menu` as
//! `{ "menus": [ {"id", "name", "price", "image_url"?}, ... ] }`.
//! A snapshot is accepted whole or not at all.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Menu entry (菜品)
///
/// Only constructed by parsing a catalog response; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MenuEntry {
    id: i64,
    name: String,
    price: Decimal,
    image_url: String,
}

impl MenuEntry {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price in currency unit
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Image URL, empty when the entry has no image
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}

/// Catalog parse failure. Any failure discards the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogParseError {
    /// Body is not a JSON object carrying a `menus` array
    #[error("invalid catalog body: {0}")]
    Body(String),

    /// A single element of `menus` is malformed
    #[error("menu entry {index}: {reason}")]
    Entry { index: usize, reason: String },
}

/// Wire shape of the catalog response
#[derive(Debug, Deserialize)]
struct MenuListResponse {
    menus: Vec<serde_json::Value>,
}

/// Wire shape of one catalog element
#[derive(Debug, Deserialize)]
struct MenuRecord {
    id: i64,
    name: String,
    price: serde_json::Number,
    #[serde(default)]
    image_url: Option<String>,
}

impl TryFrom<MenuRecord> for MenuEntry {
    type Error = String;

    fn try_from(record: MenuRecord) -> Result<Self, Self::Error> {
        if record.id <= 0 {
            return Err(format!("id must be positive, got {}", record.id));
        }
        if record.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        let price = number_to_decimal(&record.price)
            .ok_or_else(|| format!("price {} is not representable", record.price))?;
        if price.is_sign_negative() && !price.is_zero() {
            return Err(format!("price must not be negative, got {}", price));
        }

        Ok(Self {
            id: record.id,
            name: record.name,
            price: price.normalize(),
            image_url: record.image_url.unwrap_or_default(),
        })
    }
}

fn number_to_decimal(number: &serde_json::Number) -> Option<Decimal> {
    if let Some(i) = number.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = number.as_u64() {
        return Decimal::from_u64(u);
    }
    number.as_f64().and_then(Decimal::from_f64)
}

/// Parse a `GET /waiter/menu` body into an ordered catalog snapshot.
///
/// Response order is preserved. Ids must be unique within the snapshot.
///
/// An entry is rejected when `price` is not a JSON number, is negative, or
/// lies outside the range `Decimal` can hold (about ±7.9e28). One rejected
/// entry fails the whole batch.
pub fn parse_menu_response(body: &str) -> Result<Vec<MenuEntry>, CatalogParseError> {
    let response: MenuListResponse =
        serde_json::from_str(body).map_err(|e| CatalogParseError::Body(e.to_string()))?;

    let mut seen = HashSet::with_capacity(response.menus.len());
    let mut entries = Vec::with_capacity(response.menus.len());

    for (index, value) in response.menus.into_iter().enumerate() {
        let record: MenuRecord = serde_json::from_value(value).map_err(|e| {
            CatalogParseError::Entry {
                index,
                reason: e.to_string(),
            }
        })?;
        let entry = MenuEntry::try_from(record)
            .map_err(|reason| CatalogParseError::Entry { index, reason })?;
        if !seen.insert(entry.id) {
            return Err(CatalogParseError::Entry {
                index,
                reason: format!("duplicate id {}", entry.id),
            });
        }
        entries.push(entry);
    }

    Ok(entries)
}
