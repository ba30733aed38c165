use crate::models::Receipt;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory receipt storage for the lifetime of the process.
///
/// Receipts are immutable once stored; there is no update or delete.
/// Shared across request tasks through `AppState`. Keyed by the lowercase
/// hyphenated id string, so lookups match only that exact form.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<String, Receipt>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a fresh v4 id to the receipt, stores it and returns the id.
    ///
    /// Any id already on the receipt is overwritten.
    pub async fn put(&self, mut receipt: Receipt) -> Uuid {
        let id = Uuid::new_v4();
        receipt.id = Some(id);

        let mut receipts = self.receipts.write().await;
        receipts.insert(id.hyphenated().to_string(), receipt);
        tracing::debug!(receipt_id = %id, stored = receipts.len(), "Receipt stored");

        id
    }

    /// Looks up a receipt by its id string.
    ///
    /// Returns `None` for unknown ids, including other spellings of a stored
    /// UUID (braced, `urn:uuid:`, simple or uppercase).
    pub async fn get(&self, id: &str) -> Option<Receipt> {
        self.receipts.read().await.get(id).cloned()
    }

    /// Number of stored receipts.
    pub async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.receipts.read().await.is_empty()
    }
}
