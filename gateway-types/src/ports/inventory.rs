//! Inventory backend port.
//!
//! Inventory payloads are opaque to the gateway: they cross this port as
//! JSON values and the adapter owns their wire format.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::domain::CallContext;
use crate::error::BackendError;

/// Operations exposed by the inventory service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryOperation {
    Create,
    Get,
    Update,
    Delete,
    List,
}

impl InventoryOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryOperation::Create => "create",
            InventoryOperation::Get => "get",
            InventoryOperation::Update => "update",
            InventoryOperation::Delete => "delete",
            InventoryOperation::List => "list",
        }
    }

    /// Human-readable name used in error messages ("failed to ...").
    pub fn description(&self) -> &'static str {
        match self {
            InventoryOperation::Create => "create product",
            InventoryOperation::Get => "get product",
            InventoryOperation::Update => "update product",
            InventoryOperation::Delete => "delete product",
            InventoryOperation::List => "list products",
        }
    }
}

impl fmt::Display for InventoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown inventory operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for InventoryOperation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(InventoryOperation::Create),
            "get" => Ok(InventoryOperation::Get),
            "update" => Ok(InventoryOperation::Update),
            "delete" => Ok(InventoryOperation::Delete),
            "list" => Ok(InventoryOperation::List),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}

/// Port for the inventory backend.
///
/// `ctx` carries the credential admitted by the expiry gate; adapters must
/// forward it on the outgoing call.
#[async_trait::async_trait]
pub trait InventoryBackend: Send + Sync + 'static {
    async fn call(
        &self,
        operation: InventoryOperation,
        payload: Value,
        ctx: &CallContext,
    ) -> Result<Value, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_parse_from_route_segments() {
        for op in [
            InventoryOperation::Create,
            InventoryOperation::Get,
            InventoryOperation::Update,
            InventoryOperation::Delete,
            InventoryOperation::List,
        ] {
            assert_eq!(op.as_str().parse::<InventoryOperation>(), Ok(op));
        }
        assert!("purge".parse::<InventoryOperation>().is_err());
    }
}
