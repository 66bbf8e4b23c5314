//! HTTP transport for the count service.
mod transport;


pub use transport::{FormTransport, ReqwestTransport, endpoint_url};
