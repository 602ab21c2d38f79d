//! Purchase-order client.
//!
//! DESIGN
//! ======
//! The remote API speaks a richer shape than the UI needs: orders arrive
//! under a `data` envelope with nested supplier/item objects and a
//! finer-grained status enum. This module unwraps the envelope and maps
//! everything down to the flat [`PurchaseOrder`] the pages render. Missing
//! nested fields degrade to placeholder text instead of failing the decode.

#[cfg(test)]
#[path = "purchase_test.rs"]
mod purchase_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::net::client::{ApiClient, ApiError, ApiResponse, HttpClient, Method};
use crate::net::types::DataEnvelope;

const ORDERS_ENDPOINT: &str = "/api/purchase/orders";
const ORDER_FALLBACK: &str = "Purchase order request failed";

/// Placeholder for an order with no supplier attached.
pub const UNKNOWN_SUPPLIER: &str = "Unknown";
/// Placeholder for a line item with no resolvable name.
pub const UNKNOWN_ITEM: &str = "Unknown Item";

/// Order status as the UI presents it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Approved,
    Received,
    Completed,
}

impl OrderStatus {
    /// Collapse the remote status onto the four UI values. Fixed table:
    /// DRAFT, SENT → Pending; CONFIRMED → Approved; PARTIALLY_RECEIVED,
    /// RECEIVED → Received; anything else → Pending.
    pub fn from_remote(remote: RemoteStatus) -> Self {
        match remote {
            RemoteStatus::Confirmed => OrderStatus::Approved,
            RemoteStatus::PartiallyReceived | RemoteStatus::Received => OrderStatus::Received,
            RemoteStatus::Draft | RemoteStatus::Sent | RemoteStatus::Other => OrderStatus::Pending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Received => "Received",
            OrderStatus::Completed => "Completed",
        }
    }
}

/// Status vocabulary of the remote API. New server values land on `Other`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemoteStatus {
    Draft,
    Sent,
    Confirmed,
    PartiallyReceived,
    Received,
    #[default]
    #[serde(other)]
    Other,
}

/// A line on a normalized purchase order.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderItem {
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
}

/// Flat, UI-facing purchase order.
#[derive(Clone, Debug, PartialEq)]
pub struct PurchaseOrder {
    pub id: String,
    pub order_number: String,
    pub supplier: String,
    pub order_date: String,
    pub expected_date: String,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub items: Vec<OrderItem>,
}

/// Payload for creating or replacing an order.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub supplier_id: String,
    pub order_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_date: Option<String>,
    pub items: Vec<DraftItem>,
}

/// A line on an [`OrderDraft`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftItem {
    pub item_id: String,
    pub quantity: f64,
    pub unit_price: f64,
}

// Remote wire shapes. Everything the server might omit is optional here;
// normalization supplies the fallbacks.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteOrder {
    id: String,
    #[serde(default)]
    order_number: Option<String>,
    #[serde(default)]
    supplier: Option<RemoteSupplier>,
    #[serde(default)]
    order_date: Option<String>,
    #[serde(default)]
    expected_date: Option<String>,
    #[serde(default)]
    status: RemoteStatus,
    #[serde(default)]
    total_amount: Option<f64>,
    #[serde(default)]
    items: Vec<RemoteItem>,
}

#[derive(Debug, Deserialize)]
struct RemoteSupplier {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteItem {
    #[serde(default)]
    item: Option<RemoteItemRef>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    quantity: Option<f64>,
    #[serde(default)]
    unit_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RemoteItemRef {
    #[serde(default)]
    name: Option<String>,
}

impl RemoteOrder {
    fn normalize(self) -> PurchaseOrder {
        PurchaseOrder {
            id: self.id,
            order_number: self.order_number.unwrap_or_default(),
            supplier: self
                .supplier
                .and_then(|s| s.name)
                .unwrap_or_else(|| UNKNOWN_SUPPLIER.to_owned()),
            order_date: self.order_date.unwrap_or_default(),
            expected_date: self.expected_date.unwrap_or_default(),
            status: OrderStatus::from_remote(self.status),
            total_amount: self.total_amount.unwrap_or(0.0),
            items: self.items.into_iter().map(RemoteItem::normalize).collect(),
        }
    }
}

impl RemoteItem {
    fn normalize(self) -> OrderItem {
        let name = self
            .item
            .and_then(|i| i.name)
            .or(self.name)
            .unwrap_or_else(|| UNKNOWN_ITEM.to_owned());
        OrderItem {
            name,
            quantity: self.quantity.unwrap_or(0.0),
            unit_price: self.unit_price.unwrap_or(0.0),
        }
    }
}

/// Unwrap an optional `data` envelope, accepting a bare payload too.
fn unwrap_data<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ApiError> {
    if let Ok(DataEnvelope { data: Some(inner) }) =
        serde_json::from_str::<DataEnvelope<T>>(&response.body)
    {
        return Ok(inner);
    }
    response.json()
}

/// Client for `/api/purchase/orders`. All calls go through the
/// authenticated request helper; failures surface the server's message for
/// the pages to display.
#[derive(Clone)]
pub struct PurchaseApi<C> {
    api: ApiClient<C>,
}

impl<C: HttpClient> PurchaseApi<C> {
    pub fn new(api: ApiClient<C>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Typed error on transport failure, non-2xx status, or a body that
    /// fits neither the enveloped nor the bare order-list shape.
    pub async fn list(&self) -> Result<Vec<PurchaseOrder>, ApiError> {
        let response = self.api.get(ORDERS_ENDPOINT).await?;
        if !response.ok() {
            return Err(response.into_error(ORDER_FALLBACK));
        }
        let orders: Vec<RemoteOrder> = unwrap_data(&response)?;
        Ok(orders.into_iter().map(RemoteOrder::normalize).collect())
    }

    /// # Errors
    ///
    /// Same contract as [`list`](PurchaseApi::list).
    pub async fn get(&self, id: &str) -> Result<PurchaseOrder, ApiError> {
        let response = self.api.get(&format!("{ORDERS_ENDPOINT}/{id}")).await?;
        if !response.ok() {
            return Err(response.into_error(ORDER_FALLBACK));
        }
        let order: RemoteOrder = unwrap_data(&response)?;
        Ok(order.normalize())
    }

    /// # Errors
    ///
    /// Same contract as [`list`](PurchaseApi::list). Nothing is persisted
    /// client-side without the server's acknowledgment.
    pub async fn create(&self, draft: &OrderDraft) -> Result<PurchaseOrder, ApiError> {
        let response = self
            .api
            .send_json(Method::Post, ORDERS_ENDPOINT, draft)
            .await?;
        if !response.ok() {
            return Err(response.into_error(ORDER_FALLBACK));
        }
        let order: RemoteOrder = unwrap_data(&response)?;
        Ok(order.normalize())
    }

    /// # Errors
    ///
    /// Same contract as [`list`](PurchaseApi::list).
    pub async fn update(&self, id: &str, draft: &OrderDraft) -> Result<PurchaseOrder, ApiError> {
        let response = self
            .api
            .send_json(Method::Put, &format!("{ORDERS_ENDPOINT}/{id}"), draft)
            .await?;
        if !response.ok() {
            return Err(response.into_error(ORDER_FALLBACK));
        }
        let order: RemoteOrder = unwrap_data(&response)?;
        Ok(order.normalize())
    }

    /// # Errors
    ///
    /// Typed error on transport failure or non-2xx status.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self.api.delete(&format!("{ORDERS_ENDPOINT}/{id}")).await?;
        if !response.ok() {
            return Err(response.into_error(ORDER_FALLBACK));
        }
        Ok(())
    }
}
