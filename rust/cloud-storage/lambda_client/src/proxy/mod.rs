//! Invoking a lambda as if it were an HTTP endpoint behind a proxy integration.

mod envelope;
mod error;
mod request;


pub use envelope::{
    InvocationEnvelope, InvocationResult, RequestContext, decode_response, encode_request,
};
pub use error::{DecodeStage, EncodeErr, InvokeError};
pub use request::{InvocationRequest, Params};
