//! Payloads sent to the waste-management API

use serde::{Deserialize, Serialize};

/// Photo attached to a dumping report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    /// Build an attachment, guessing the content type from the file name
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();

        Self {
            file_name,
            content_type,
            bytes,
        }
    }
}

/// Illegal dumping report, sent as multipart form data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpingReport {
    pub location: String,
    pub description: String,
    pub image: Option<ImageAttachment>,
}

/// Product purchase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub product_id: u64,
    pub quantity: u32,
}

impl PurchaseRequest {
    pub fn new(product_id: u64) -> Self {
        Self {
            product_id,
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// Collection pickup booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupRequest {
    pub date: String,
    pub time_slot: String,
    pub waste_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
