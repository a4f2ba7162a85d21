pub mod error;
pub mod security_headers;
pub mod timeit;
