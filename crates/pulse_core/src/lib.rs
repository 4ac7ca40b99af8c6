pub mod config;
pub mod error;
pub mod types;

pub use config::ClientConfig;
pub use error::Error;
pub use types::{
    Article, QueryInput, RequestState, SummarizeRequest, SummarizeResponse, SummaryResult,
    DEFAULT_NUM_RESULTS, DEFAULT_QUERY, MAX_NUM_RESULTS, MIN_NUM_RESULTS,
};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::{Article, ClientConfig, Error, QueryInput, RequestState, Result, SummaryResult};
}
