pub mod client;
pub mod error;
pub mod iterator;
pub mod latest;
pub mod records;
pub mod stream;
