use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use skiff_core::driver::Operation;
use tests::{fixtures::*, DbTest};

#[tokio::test]
async fn order_and_customer_scenario() {
    let test = DbTest::new().await;
    let customers = test.repository::<Customer>().await;
    let orders = test.repository::<Order>().await;

    let mut a = Customer::named("A");
    customers.add(&mut a).await.unwrap();
    assert_eq!(a.id, Some(1));

    let mut lonely = Customer::named("B");
    customers.add(&mut lonely).await.unwrap();

    let mut order = Order::for_customer(a.id);
    orders.add(&mut order).await.unwrap();

    let found = orders.find_with(order.id, true).await.unwrap().unwrap();
    assert_eq!(
        found.customer,
        Some(Customer {
            id: Some(1),
            name: "A".to_string(),
            orders: vec![],
        })
    );

    let all = customers.all_with(true).await.unwrap();
    assert_eq!(all.len(), 2);

    assert_eq!(
        all[0].orders,
        [Order {
            id: order.id,
            customer_id: Some(1),
            customer: None,
        }]
    );
    assert!(all[1].orders.is_empty());
}

#[tokio::test]
async fn both_directions_agree() {
    let test = DbTest::new().await;
    let customers = test.repository::<Customer>().await;
    let orders = test.repository::<Order>().await;

    let mut a = Customer::named("A");
    let mut b = Customer::named("B");
    customers.add(&mut a).await.unwrap();
    customers.add(&mut b).await.unwrap();

    for customer_id in [a.id, b.id, a.id] {
        orders.add(&mut Order::for_customer(customer_id)).await.unwrap();
    }

    let mut parent_pairs = vec![];
    for customer in customers.all_with(true).await.unwrap() {
        for order in &customer.orders {
            parent_pairs.push((order.id, customer.id));
        }
    }

    let mut child_pairs = vec![];
    for order in orders.all_with(true).await.unwrap() {
        let customer = order.customer.unwrap();
        child_pairs.push((order.id, customer.id));
    }

    parent_pairs.sort();
    child_pairs.sort();
    assert_eq!(parent_pairs, child_pairs);
    assert_eq!(child_pairs.len(), 3);
}

#[tokio::test]
async fn load_related_on_existing_entity() {
    let test = DbTest::new().await;
    let customers = test.repository::<Customer>().await;
    let orders = test.repository::<Order>().await;

    let mut customer = Customer::named("A");
    customers.add(&mut customer).await.unwrap();

    orders.add(&mut Order::for_customer(customer.id)).await.unwrap();
    orders.add(&mut Order::for_customer(customer.id)).await.unwrap();

    customers.load_related(&mut customer).await.unwrap();
    let ids: Vec<_> = customer.orders.iter().map(|order| order.id).collect();
    assert_eq!(ids, [Some(1), Some(2)]);
}

#[tokio::test]
async fn null_foreign_key_attaches_nothing() {
    let test = DbTest::new().await;
    let orders = test.repository::<Order>().await;

    let mut order = Order::for_customer(None);
    orders.add(&mut order).await.unwrap();

    test.log().clear();
    let found = orders.find_with(order.id, true).await.unwrap().unwrap();
    assert_eq!(found.customer, None);

    // Only the select by id ran.
    assert_eq!(test.log().queries().len(), 1);
}

#[tokio::test]
async fn orphaned_reference_attaches_nothing() {
    let test = DbTest::new().await;
    let orders = test.repository::<Order>().await;

    // Foreign keys are not enforced, so the reference can dangle.
    let mut order = Order::for_customer(Some(99));
    orders.add(&mut order).await.unwrap();

    let found = orders.find_with(order.id, true).await.unwrap();
    assert_matches!(found, Some(Order { customer: None, .. }));

    let all = orders.all_with(true).await.unwrap();
    assert_eq!(all[0].customer, None);
}

#[tokio::test]
async fn batch_load_runs_one_query_per_edge() {
    let test = DbTest::new().await;
    let customers = test.repository::<Customer>().await;
    let orders = test.repository::<Order>().await;

    for name in ["A", "B", "C", "D"] {
        let mut customer = Customer::named(name);
        customers.add(&mut customer).await.unwrap();
        orders.add(&mut Order::for_customer(customer.id)).await.unwrap();
    }

    test.log().clear();
    let all = customers.all_with(true).await.unwrap();

    assert!(all.iter().all(|customer| customer.orders.len() == 1));

    // The customer select, then the order select.
    let sql = test.log().sql();
    assert_eq!(
        sql,
        [
            r#"SELECT * FROM "Customer";"#,
            r#"SELECT * FROM "Order" WHERE "CustomerId" IS NOT NULL;"#,
        ]
    );
    assert_eq!(test.log().count(|op| matches!(op, Operation::QuerySql(_))), 2);
}

#[tokio::test]
async fn related_rows_are_not_loaded_unless_asked() {
    let test = DbTest::new().await;
    let customers = test.repository::<Customer>().await;
    let orders = test.repository::<Order>().await;

    let mut customer = Customer::named("A");
    customers.add(&mut customer).await.unwrap();
    orders.add(&mut Order::for_customer(customer.id)).await.unwrap();

    let found = customers.find(customer.id).await.unwrap().unwrap();
    assert!(found.orders.is_empty());
}

#[tokio::test]
async fn relations_touching_the_table() {
    let test = DbTest::new().await;
    let customers = test.repository::<Customer>().await;

    let edges: Vec<_> = customers
        .relations()
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(edges, ["Order.CustomerId -> Customer.Id"]);
}

#[tokio::test]
async fn self_referencing_edge_loads_both_directions() {
    let test = DbTest::new().await;
    let employees = test.repository::<Employee>().await;

    let mut boss = Employee::new("Boss", None);
    employees.add(&mut boss).await.unwrap();

    let mut first = Employee::new("First", boss.id);
    let mut second = Employee::new("Second", boss.id);
    employees.add(&mut first).await.unwrap();
    employees.add(&mut second).await.unwrap();

    let edges = employees.relations();
    assert_eq!(edges.len(), 1);
    assert!(edges[0].is_self_referencing());

    let boss = employees.find_with(boss.id, true).await.unwrap().unwrap();
    assert_eq!(boss.manager, None);

    let names: Vec<_> = boss.reports.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["First", "Second"]);

    let first = employees.find_with(first.id, true).await.unwrap().unwrap();
    assert_eq!(first.manager.as_ref().map(|m| m.name.as_str()), Some("Boss"));
    assert!(first.reports.is_empty());

    let all = employees.all_with(true).await.unwrap();
    assert_eq!(all[0].reports.len(), 2);
    assert_eq!(all[1].manager.as_ref().and_then(|m| m.id), boss.id);
    assert_eq!(all[2].manager.as_ref().and_then(|m| m.id), boss.id);
}
