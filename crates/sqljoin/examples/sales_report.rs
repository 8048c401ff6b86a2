//! Build a reporting query from optional filters.
//!
//! Run with: `cargo run -p sqljoin --example sales_report`

use sqljoin::{Join, JoinResult, join};

fn main() -> JoinResult<()> {
    let mut filters = join(" AND ");
    filters.add_with("sales.price > ?", (5_i32,));

    let report = |filters: &Join| {
        join(" ")
            .add("SELECT product, SUM(price) FROM sales WHERE")
            .add(filters)
            .add_with("GROUP BY product.id HAVING COUNT(DISTINCT stores.id) > ?", (1_i32,))
            .try_end()
    };

    let (query, params) = report(&filters)?;
    println!("{query} with {params:?}");

    filters.add_with("sales.price < ?", (500_i32,));

    let (query, params) = report(&filters)?;
    println!("{query} with {params:?}");

    Ok(())
}
