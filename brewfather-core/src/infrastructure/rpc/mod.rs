//! JSON-RPC 2.0 envelope types

pub mod types;

pub use types::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR, RpcError,
    RpcErrorData, RpcRequest, RpcResponse,
};
