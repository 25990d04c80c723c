// Mon Feb 2 2026 - Alex

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub address: String,
}

impl Endpoint {
    pub fn new(address: String) -> Self {
        Self { address }
    }
}

// Static, ordered endpoint set for one run. Pool size doubles as the
// concurrency degree: one dispatch slot per endpoint.
pub struct EndpointPool {
    endpoints: Vec<Endpoint>,
}

impl EndpointPool {
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self { endpoints }
    }

    pub fn from_addresses(addresses: &[String]) -> Self {
        Self::new(addresses.iter().cloned().map(Endpoint::new).collect())
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn get(&self, index: usize) -> Option<&Endpoint> {
        self.endpoints.get(index)
    }

    // Deterministic round-robin on the item index, independent of item
    // content and completion order.
    pub fn assign(&self, item_index: usize) -> usize {
        item_index % self.endpoints.len()
    }
}
