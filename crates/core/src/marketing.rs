//! Banners and back-in-stock product notifications.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerPlacement {
    Home,
    Category,
    Checkout,
    Popup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: EntityId,
    pub name: String,
    pub placement: BannerPlacement,
    pub desktop_image_url: String,
    #[serde(default)]
    pub mobile_image_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub starts_at: Option<Timestamp>,
    #[serde(default)]
    pub ends_at: Option<Timestamp>,
    pub is_active: bool,
}

impl Banner {
    /// Active and inside its publication window.
    pub fn is_live(&self, now: Timestamp) -> bool {
        self.is_active
            && self.starts_at.map_or(true, |s| s <= now)
            && self.ends_at.map_or(true, |e| now < e)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBanner {
    pub name: String,
    pub placement: BannerPlacement,
    pub desktop_image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<Timestamp>,
}

/// A shopper waiting for a product to come back in stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNotification {
    pub id: EntityId,
    pub email: String,
    pub product_id: EntityId,
    pub product_name: String,
    pub notified: bool,
    pub created_at: Timestamp,
    #[serde(default)]
    pub notified_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationStats {
    pub total: u64,
    pub pending: u64,
    pub notified: u64,
}
