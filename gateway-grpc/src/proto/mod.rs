//! Wire messages and unary clients.
//!
//! Messages are declared with `prost` derives instead of being generated at
//! build time, so the workspace builds without `protoc`. Field tags must stay
//! in sync with the services' `.proto` definitions.

pub mod auth;
pub mod inventory;

use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;

/// Performs one unary call on `path` (`/package.Service/Method`).
pub(crate) async fn unary<Req, Resp>(
    grpc: &mut Grpc<Channel>,
    path: &'static str,
    request: tonic::Request<Req>,
) -> Result<tonic::Response<Resp>, tonic::Status>
where
    Req: prost::Message + Send + Sync + 'static,
    Resp: prost::Message + Default + Send + Sync + 'static,
{
    grpc.ready()
        .await
        .map_err(|err| tonic::Status::unavailable(format!("service was not ready: {err}")))?;
    let codec: ProstCodec<Req, Resp> = ProstCodec::default();
    grpc.unary(request, PathAndQuery::from_static(path), codec)
        .await
}
