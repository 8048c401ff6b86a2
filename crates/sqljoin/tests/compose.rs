use sqljoin::{Fragment, Join, JoinConfig, JoinError, join, params};

#[test]
fn builds_query_from_optional_filters() {
    let min_price: Option<i32> = Some(5);
    let max_price: Option<i32> = None;
    let store: Option<&'static str> = Some("north");

    let mut filters = join(" AND ");
    filters.add("sales.deleted_at IS NULL");
    if let Some(min) = min_price {
        filters.add_with("sales.price > ?", (min,));
    }
    if let Some(max) = max_price {
        filters.add_with("sales.price < ?", (max,));
    }
    if let Some(store) = store {
        filters.add_with("stores.name = ?", (store,));
    }

    let (query, params) = join(" ")
        .add("SELECT product, SUM(price) FROM sales JOIN stores ON stores.id = sales.store_id WHERE")
        .add(&filters)
        .add_with("GROUP BY product HAVING COUNT(DISTINCT stores.id) > ?", (1_i64,))
        .must_end();

    assert_eq!(
        query,
        "SELECT product, SUM(price) FROM sales JOIN stores ON stores.id = sales.store_id WHERE \
         sales.deleted_at IS NULL AND sales.price > ? AND stores.name = ? \
         GROUP BY product HAVING COUNT(DISTINCT stores.id) > ?"
    );
    assert_eq!(format!("{params:?}"), r#"[5, "north", 1]"#);
    assert_eq!(sqljoin::as_sql_refs(&params).len(), 3);
}

#[test]
fn builders_nest_several_levels() {
    let any_of = join(" OR ")
        .then_with("status = ?", ("active",))
        .then_with("status = ?", ("trial",));
    let all_of = join(" AND ")
        .then(&any_of)
        .then_with("age >= ?", (18_i32,));

    let (text, params, err) = join(" ")
        .add("SELECT id FROM users WHERE")
        .add(&all_of)
        .end();

    assert!(err.is_none());
    assert_eq!(
        text,
        "SELECT id FROM users WHERE status = ? OR status = ? AND age >= ?"
    );
    assert_eq!(format!("{params:?}"), r#"["active", "trial", 18]"#);
}

#[test]
fn failure_in_a_clause_surfaces_at_the_end() {
    let clause = Join::with_config(JoinConfig::new().with_delimiter(", ").with_max_len(8))
        .then("id")
        .then("username")
        .then("email");
    assert!(clause.is_failed());

    let mut q = join(" ");
    q.add("SELECT").add(&clause).add("FROM users");

    let (text, _, err) = q.end();
    assert_eq!(text, "SELECT");
    match err {
        Some(JoinError::Nested(inner)) => assert!(inner.is_capacity()),
        other => panic!("unexpected: {other:?}"),
    }
    assert!(q.try_end().is_err());
}

#[test]
fn fragments_of_every_kind() {
    #[derive(Debug)]
    enum Order {
        Asc,
    }

    let column = String::from("created_at");
    let (text, params) = join(" ")
        .add("ORDER BY")
        .add(&column)
        .add(Fragment::debug(&Order::Asc))
        .add("LIMIT ?")
        .add_with(Fragment::display(&"OFFSET ?"), params![10_i64, 20_i64])
        .must_end();

    assert_eq!(text, "ORDER BY created_at Asc LIMIT ? OFFSET ?");
    assert_eq!(format!("{params:?}"), "[10, 20]");
}
