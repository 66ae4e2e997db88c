pub mod connection;
pub mod messages;
pub mod purge;
pub(crate) mod schema;
pub mod transactions;

#[cfg(test)]
pub(crate) mod test_utils;

pub use connection::{DbPool, init_db};
pub use messages::{get_user_history, save_message};
pub use purge::{PurgeOutcome, purge_user};
pub use transactions::{aggregate_by_category, query_by_period, save_transaction};
