//! gRPC adapter for the inventory backend port.
//!
//! Translates the opaque JSON payloads handed over by the HTTP side into
//! `inventory.InventoryService` messages and back.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tonic::transport::Channel;

use gateway_types::{BackendError, CallContext, InventoryBackend, InventoryOperation};

use crate::metadata::outgoing;
use crate::proto::inventory::{self as pb, InventoryServiceClient};
use crate::status_error;

/// Relays inventory operations to `inventory.InventoryService`, forwarding
/// the caller's credential as `authorization` metadata.
#[derive(Debug, Clone)]
pub struct GrpcInventoryBackend {
    client: InventoryServiceClient,
}

impl GrpcInventoryBackend {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: InventoryServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl InventoryBackend for GrpcInventoryBackend {
    #[tracing::instrument(skip_all, fields(operation = %operation))]
    async fn call(
        &self,
        operation: InventoryOperation,
        payload: Value,
        ctx: &CallContext,
    ) -> Result<Value, BackendError> {
        let mut client = self.client.clone();
        match operation {
            InventoryOperation::Create => {
                let request = outgoing(decode::<pb::CreateRequest>(payload)?, ctx)?;
                encode(client.create_product(request).await)
            }
            InventoryOperation::Get => {
                let request = outgoing(decode::<pb::GetRequest>(payload)?, ctx)?;
                encode(client.get_product(request).await)
            }
            InventoryOperation::Update => {
                let request = outgoing(decode::<pb::UpdateRequest>(payload)?, ctx)?;
                encode(client.update_product(request).await)
            }
            InventoryOperation::Delete => {
                let request = outgoing(decode::<pb::DeleteRequest>(payload)?, ctx)?;
                encode(client.delete_product(request).await)
            }
            InventoryOperation::List => {
                let request = outgoing(decode::<pb::ListRequest>(payload)?, ctx)?;
                encode(client.list_products(request).await)
            }
        }
    }
}

fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, BackendError> {
    serde_json::from_value(payload).map_err(|err| BackendError::InvalidPayload(err.to_string()))
}

fn encode<T: Serialize>(
    result: Result<tonic::Response<T>, tonic::Status>,
) -> Result<Value, BackendError> {
    let message = result.map_err(status_error)?.into_inner();
    serde_json::to_value(&message).map_err(|err| BackendError::Protocol(err.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_create_payload() {
        let request: pb::CreateRequest = decode(json!({
            "product": {
                "name": "Test Product",
                "description": "Test Description",
                "price": 29.99,
                "quantity": 100
            }
        }))
        .unwrap();

        let product = request.product.unwrap();
        assert_eq!(product.name, "Test Product");
        assert_eq!(product.price, 29.99);
        assert_eq!(product.quantity, 100);
        assert!(!product.available);
    }

    #[test]
    fn test_decode_list_payload_with_defaults() {
        let request: pb::ListRequest =
            decode(json!({ "page_size": 10, "order_by": "name" })).unwrap();

        assert_eq!(request.page_size, 10);
        assert_eq!(request.order_by, "name");
        assert!(request.page_token.is_empty());
    }

    #[test]
    fn test_decode_rejects_wrong_types() {
        let result = decode::<pb::GetRequest>(json!({ "id": 42 }));
        assert!(matches!(result, Err(BackendError::InvalidPayload(_))));

        let result = decode::<pb::GetRequest>(json!(["not", "an", "object"]));
        assert!(matches!(result, Err(BackendError::InvalidPayload(_))));
    }

    #[test]
    fn test_encode_response_as_json() {
        let response = tonic::Response::new(pb::DeleteResponse { success: true });

        assert_eq!(encode(Ok(response)).unwrap(), json!({ "success": true }));
    }

    #[test]
    fn test_encode_maps_status_to_unavailable() {
        let result = encode::<pb::GetResponse>(Err(tonic::Status::not_found("no such product")));

        assert!(matches!(
            result,
            Err(BackendError::Unavailable(msg)) if msg.contains("no such product")
        ));
    }
}
