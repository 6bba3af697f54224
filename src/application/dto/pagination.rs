use serde::{Deserialize, Serialize};

/// Offset-paginated listing. `total` counts the whole filtered set,
/// independent of the returned window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub limit: u32,
    pub skip: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, limit: u32, skip: u32) -> Self {
        Self {
            items,
            total,
            limit,
            skip,
        }
    }
}
