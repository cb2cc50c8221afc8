use fakeset_core::ElementType;
use fakeset_schema::books;
use fakeset_testing::{CancellationHandle, Table, TableError, fake_table, fake_table_async};
use futures::StreamExt;

use crate::helpers::{book, draft, titles};

#[test]
fn should_filter_and_project_through_provider() {
    let table = fake_table(vec![book(1, "A"), draft(2, "B"), book(3, "C")]);
    let provider = table.provider();

    let query = provider
        .create_query()
        .filter(|b| b.is_published)
        .select(|b| b.title);

    assert_eq!(provider.execute(&query), vec!["A", "C"]);
    assert!(query.element_type().is::<String>());
}

#[test]
fn should_execute_deferred_query_against_live_store() {
    let table = fake_table(vec![book(1, "A")]);
    let published = table.provider().create_query().filter(|b| b.is_published);

    table.add(book(2, "B"));
    table.remove(book(1, "A"));

    assert_eq!(titles(published.to_vec()), vec!["B"]);
}

#[test]
fn should_order_and_page_rows() {
    let table = fake_table(vec![book(3, "C"), book(1, "A"), book(2, "B"), book(4, "D")]);
    let page = table
        .provider()
        .create_query()
        .order_by(|b| b.id)
        .skip(1)
        .take(2);

    assert_eq!(titles(page.clone()), vec!["B", "C"]);
    assert_eq!(page.count(), 2);
    assert_eq!(
        page.expression().to_string(),
        format!("{}.order_by().skip(1).take(2)", std::any::type_name::<books::Model>())
    );
}

#[test]
fn should_expose_element_type_and_root_expression() {
    let table = fake_table::<books::Model>(vec![]);

    assert_eq!(table.element_type(), ElementType::of::<books::Model>());
    assert!(table.expression().is_source());
    assert_eq!(table.expression().element_type(), table.element_type());
}

#[test]
fn should_refuse_async_provider_on_sync_table() {
    let table = fake_table(vec![book(1, "A")]);
    let result = table.async_provider();
    assert!(
        matches!(result, Err(TableError::AsyncQueryUnsupported)),
        "expected AsyncQueryUnsupported, got {result:?}"
    );
}

#[tokio::test]
async fn should_enumerate_asynchronously_over_snapshot() {
    let table = fake_table_async(vec![book(1, "A"), draft(2, "B"), book(3, "C")]);
    let provider = table.async_provider().unwrap();
    let query = provider.create_query().filter(|b| b.is_published);

    let mut enumerator = provider.enumerate_async(&query);
    table.add(book(4, "D"));

    let cancel = CancellationHandle::new();
    let mut seen = Vec::new();
    while enumerator.move_next(&cancel).await.unwrap() {
        seen.push(enumerator.current().unwrap().title.clone());
    }
    assert_eq!(seen, vec!["A", "C"]);

    let rows = provider.to_vec_async(&query, &cancel).await.unwrap();
    assert_eq!(titles(rows), vec!["A", "C", "D"]);
}

#[tokio::test]
async fn should_stream_rows_from_async_enumerator() {
    let table = fake_table_async(vec![book(1, "A"), book(2, "B")]);
    let provider = table.async_provider().unwrap();

    let ids: Vec<i32> = provider
        .enumerate_async(&provider.create_query().select(|b| b.id))
        .collect()
        .await;
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn should_stop_async_enumeration_when_cancelled() {
    let table = fake_table_async(vec![book(1, "A"), book(2, "B")]);
    let provider = table.async_provider().unwrap();
    let cancel = CancellationHandle::new();

    let mut enumerator = provider.enumerate_async(&provider.create_query());
    assert!(enumerator.move_next(&cancel).await.unwrap());
    cancel.cancel();

    let result = enumerator.move_next(&cancel).await;
    assert!(matches!(result, Err(TableError::Cancelled)));
}
