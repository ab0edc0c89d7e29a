//! Request shaping and dispatch for remote operations.
//!
//! Every command follows the same path:
//!
//! ```text
//! Operation + Call → RequestBuilder → ApiRequest → Dispatcher → JSON | file
//! ```

pub mod catalog;
pub(crate) mod dispatch;
pub(crate) mod operation;
pub mod payload;
pub(crate) mod request;

pub use dispatch::Dispatcher;
pub use operation::{
    BodyKind, HttpMethod, Operation, QueryDefault, QueryParam, QueryValue, ResponseKind, Service,
};
pub use request::{
    ApiRequest, Call, Payload, RequestBuilder, CONTENT_TYPE_JSON, CONTENT_TYPE_OCTET_STREAM,
    SUBSCRIPTION_KEY_HEADER,
};
