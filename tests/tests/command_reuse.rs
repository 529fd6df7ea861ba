use pretty_assertions::assert_eq;
use skiff_core::driver::Operation;
use tests::{fixtures::*, DbTest};

use std::sync::Arc;

#[tokio::test]
async fn repository_is_cached_per_model() {
    let test = DbTest::new().await;

    let first = test.repository::<Customer>().await;
    let second = test.repository::<Customer>().await;
    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn concurrent_first_calls_build_once() {
    let test = DbTest::new().await;

    let (first, second, orders) = tokio::join!(
        test.db.repository::<Customer>(),
        test.db.repository::<Customer>(),
        test.db.repository::<Order>(),
    );

    assert!(Arc::ptr_eq(&first.unwrap(), &second.unwrap()));
    assert!(orders.is_ok());

    // Customer resolves its own columns and those of `Order`; `Order` resolves
    // its own and those of `Customer`.
    let listed = test
        .log()
        .count(|op| matches!(op, Operation::ListColumns(_)));
    assert_eq!(listed, 4);
}

#[tokio::test]
async fn failed_build_is_retried() {
    let test = DbTest::with_schema("").await;

    let err = test.db.repository::<Tag>().await.unwrap_err();
    assert!(err.is_invalid_schema());

    test.execute(r#"CREATE TABLE "Tag" ("Id" INTEGER PRIMARY KEY, "Label" TEXT NOT NULL);"#);
    assert!(test.db.repository::<Tag>().await.is_ok());
}

#[tokio::test]
async fn operations_reuse_compiled_text() {
    let test = DbTest::new().await;
    let customers = test.repository::<Customer>().await;

    test.log().clear();

    let mut customer = Customer::named("A");
    customers.add(&mut customer).await.unwrap();
    customers.find(customer.id).await.unwrap();
    customers.find(customer.id).await.unwrap();
    customer.name = "B".to_string();
    customers.update(&customer).await.unwrap();
    customers.all().await.unwrap();
    customers.delete(&customer).await.unwrap();

    let commands = customers.commands();
    let expected = [
        &commands.insert.sql,
        &commands.select_by_id.sql,
        &commands.select_by_id.sql,
        &commands.update.sql,
        &commands.select_all.sql,
        &commands.delete.sql,
    ];

    let queries = test.log().queries();
    assert_eq!(queries.len(), expected.len());

    for (query, sql) in queries.iter().zip(expected) {
        assert!(Arc::ptr_eq(&query.sql, sql), "regenerated: {}", query.sql);
    }

    // Metadata was resolved once, at construction.
    assert!(!test.log().has_introspection());
}

#[tokio::test]
async fn construction_introspects_store() {
    let test = DbTest::new().await;
    test.repository::<Order>().await;

    assert!(test.log().has_introspection());

    test.log().clear();
    test.repository::<Order>().await;
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn compiled_sqlite_commands() {
    let test = DbTest::new().await;
    let customers = test.repository::<Customer>().await;
    let commands = customers.commands();

    assert_eq!(&*commands.select_all.sql, r#"SELECT * FROM "Customer";"#);
    assert_eq!(
        &*commands.select_by_id.sql,
        r#"SELECT * FROM "Customer" WHERE "Id" = @Id;"#
    );
    assert_eq!(
        &*commands.insert.sql,
        r#"INSERT INTO "Customer" ("Name") VALUES (@Name) RETURNING "Id";"#
    );
    assert_eq!(
        &*commands.update.sql,
        r#"UPDATE "Customer" SET "Name" = @Name WHERE "Id" = @Id;"#
    );
    assert_eq!(
        &*commands.delete.sql,
        r#"DELETE FROM "Customer" WHERE "Id" = @Id;"#
    );
}
