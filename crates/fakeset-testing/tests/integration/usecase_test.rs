//! Application-style code written against `Table`, driven by fake tables.

use fakeset_schema::books;
use fakeset_testing::{Table, TableError, Value, fake_table, fake_table_async};

use crate::helpers::{book, draft, titles};

// ── PublishDrafts ────────────────────────────────────────────────────────────

struct PublishDraftsUseCase<R: Table<books::Model>> {
    repo: R,
}

impl<R: Table<books::Model>> PublishDraftsUseCase<R> {
    fn execute(&self) -> usize {
        let drafts = self
            .repo
            .as_no_tracking()
            .provider()
            .create_query()
            .filter(|b| !b.is_published)
            .to_vec();
        let count = drafts.len();
        let published = drafts
            .iter()
            .cloned()
            .map(|b| books::Model {
                is_published: true,
                ..b
            })
            .collect();
        self.repo.remove_range(drafts);
        self.repo.add_range(published);
        count
    }
}

#[test]
fn should_publish_all_drafts() {
    let usecase = PublishDraftsUseCase {
        repo: fake_table(vec![book(1, "A"), draft(2, "B"), draft(3, "C")]),
    };

    assert_eq!(usecase.execute(), 2);
    assert!(usecase.repo.iter().all(|b| b.is_published));
    assert_eq!(titles(usecase.repo.iter()), vec!["A", "B", "C"]);
}

#[test]
fn should_publish_nothing_when_no_drafts() {
    let usecase = PublishDraftsUseCase {
        repo: fake_table(vec![book(1, "A")]),
    };
    assert_eq!(usecase.execute(), 0);
    assert_eq!(usecase.repo.store().len(), 1);
}

// ── GetBook ──────────────────────────────────────────────────────────────────

#[derive(Debug)]
enum GetBookError {
    NotFound,
    Table(#[allow(dead_code)] TableError),
}

impl From<TableError> for GetBookError {
    fn from(e: TableError) -> Self {
        Self::Table(e)
    }
}

struct GetBookUseCase<R: Table<books::Model>> {
    repo: R,
}

impl<R: Table<books::Model>> GetBookUseCase<R> {
    async fn execute(&self, id: i32) -> Result<books::Model, GetBookError> {
        self.repo
            .include("Author")
            .find_async(vec![Value::from(id)])
            .await?
            .ok_or(GetBookError::NotFound)
    }
}

#[tokio::test]
async fn should_return_not_found_with_default_finder() {
    let usecase = GetBookUseCase {
        repo: fake_table_async(vec![book(1, "A")]),
    };
    let result = usecase.execute(1).await;
    assert!(
        matches!(result, Err(GetBookError::NotFound)),
        "expected NotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_book_with_overridden_finder() {
    let table = fake_table(vec![book(1, "A"), book(2, "B")]);
    let store = table.store().clone();
    let usecase = GetBookUseCase {
        repo: table.with_finder(move |keys| match keys {
            [Value::Int(Some(id))] => store.snapshot().into_iter().find(|b| b.id == *id),
            _ => None,
        }),
    };

    let found = usecase.execute(2).await.unwrap();
    assert_eq!(found, book(2, "B"));
}
