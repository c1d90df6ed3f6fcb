//! Account sources backed by external endpoints.

pub mod rpc;

pub use rpc::RpcAccountSource;
