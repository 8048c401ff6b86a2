//! Delimited text builder with out-of-band parameters.
//!
//! `Join` complements hand-written SQL strings: instead of concatenating
//! clauses and tracking the argument list by hand, each clause is added
//! together with its own arguments, and nested builders carry theirs along.
//!
//! # Example
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
//! ```

mod builder;
mod write;


pub use builder::Join;

/// Start a builder that joins fragments with `delimiter`.
pub fn join(delimiter: impl Into<String>) -> Join {
    Join::new(delimiter)
}
