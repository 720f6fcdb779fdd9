//! Moving ceremony data across the JSON/binary boundary in both directions.

pub mod request;
pub mod response;

pub use request::{decode_assertion, decode_registration, RequestTranscoder};
pub use response::{add_type_hints, encode_result};
