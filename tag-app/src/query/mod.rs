pub mod query_client;
pub mod query_key;
pub mod tags_query;

pub use query_client::QueryClient;
pub use query_key::{QueryKey, TAGS_QUERY_KEY};
pub use tags_query::fetch_tags;
