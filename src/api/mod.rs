pub mod envelope;
pub mod error;
pub mod source;

pub use envelope::{decode_envelope, Envelope};
pub use error::FetchError;
pub use source::{HttpStatisticsSource, StatisticsSource};
