//! Request pipeline stages, outermost first: security headers, request id,
//! request logging.

pub mod logging;
pub mod request_id;
pub mod security_headers;

pub use self::logging::log_request;
pub use self::request_id::{RequestId, request_id};
pub use self::security_headers::security_headers;
