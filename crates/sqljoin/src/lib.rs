//! # sqljoin
//!
//! A fluent joiner for delimited text with out-of-band parameters.
//!
//! ## Features
//!
//! - **Delimiters handled for you**: never leading, never trailing, never doubled
//! - **Parameters travel with their text**: each fragment brings its own arguments,
//!   in call order
//! - **Composable**: a builder can be added to another one, carrying its parameters along
//! - **Chain-friendly errors**: the first failure is latched and reported once, at the end
//!
//! ```ignore
//! use sqljoin::join;
//!
//! let mut filters = join(" AND ");
//! filters.add_with("sales.price > ?", (5_i32,));
//!
//! let (query, params) = join(" ")
//!     .add("SELECT product, SUM(price) FROM sales WHERE")
//!     .add(&filters)
//!     .add_with("GROUP BY product.id HAVING COUNT(DISTINCT stores.id) > ?", (1_i32,))
//!     .must_end();
//!
//! let rows = client.query(&query, &sqljoin::as_sql_refs(&params)).await?;
//! ```

pub mod config;
pub mod error;
pub mod fragment;
pub mod join;
pub mod param;

pub use config::JoinConfig;
pub use error::{JoinError, JoinResult};
pub use fragment::{Fragment, IntoFragment};
pub use join::{Join, join};
pub use param::{IntoParams, Param};

/// Borrow finished parameters as refs compatible with `tokio-postgres`.
pub fn as_sql_refs(params: &[Param]) -> Vec<&(dyn tokio_postgres::types::ToSql + Sync)> {
    params.iter().map(Param::as_sql).collect()
}
