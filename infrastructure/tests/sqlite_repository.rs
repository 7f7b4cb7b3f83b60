//! Integration tests for the SQLite repository and its post-commit event
//! flush, against an in-memory database.

#![allow(clippy::unwrap_used)] // Panics: tests drive known-good flows

use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use todolist_application::testing::{FailingSubscriber, RecordingSubscriber};
use todolist_application::{RepositoryError, TodoListRepository};
use todolist_domain::{
    DomainEventKind, DomainEventPayload, DomainEvents, Entity, TodoItem, TodoList, TodoListId,
};
use todolist_infrastructure::{DomainEventDispatcher, SqliteTodoListRepository, init_schema};

/// One connection so every query sees the same in-memory database.
async fn pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();
    pool
}

fn groceries() -> TodoList {
    let items = vec![
        TodoItem::create("Milk".to_string(), "Two liters".to_string(), None).unwrap(),
        TodoItem::create("Bread".to_string(), "Sourdough".to_string(), None).unwrap(),
    ];
    TodoList::create(
        "Groceries".to_string(),
        "Weekly shop".to_string(),
        None,
        Some(items),
    )
    .unwrap()
}

#[tokio::test]
async fn add_then_find_round_trips_the_aggregate() {
    let repository = SqliteTodoListRepository::new(pool().await);
    let mut list = groceries();
    repository.add(&mut list).await.unwrap();

    let stored = repository.find(list.id()).await.unwrap().unwrap();

    assert_eq!(stored.id(), list.id());
    assert_eq!(stored.name(), "Groceries");
    assert_eq!(stored.description(), "Weekly shop");
    assert_eq!(stored.date_created(), list.date_created());
    assert_eq!(stored.date_completed(), None);
    assert!(!stored.completed());

    // Items come back in insertion order with their fields intact.
    assert_eq!(stored.items().len(), 2);
    assert_eq!(stored.items()[0].id(), list.items()[0].id());
    assert_eq!(stored.items()[0].name(), "Milk");
    assert_eq!(stored.items()[1].name(), "Bread");
    assert!(!stored.items()[0].completed());
}

#[tokio::test]
async fn find_unknown_id_is_none() {
    let repository = SqliteTodoListRepository::new(pool().await);
    assert!(repository.find(TodoListId::new()).await.unwrap().is_none());
}

#[tokio::test]
async fn save_unknown_id_is_not_found() {
    let repository = SqliteTodoListRepository::new(pool().await);
    let mut list = groceries();

    let err = repository.save(&mut list).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { id } if id == list.id()));
}

#[tokio::test]
async fn list_returns_every_stored_aggregate_in_insertion_order() {
    let repository = SqliteTodoListRepository::new(pool().await);
    let mut first = groceries();
    let mut second = TodoList::create(
        "Chores".to_string(),
        "Around the house".to_string(),
        None,
        None,
    )
    .unwrap();
    repository.add(&mut first).await.unwrap();
    repository.add(&mut second).await.unwrap();

    let lists = repository.list().await.unwrap();
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].id(), first.id());
    assert_eq!(lists[1].id(), second.id());
    assert!(lists[1].items().is_empty());
}

#[tokio::test]
async fn save_persists_completion_and_publishes_exactly_one_event() {
    let recorder = Arc::new(RecordingSubscriber::default());
    let mut dispatcher = DomainEventDispatcher::new();
    dispatcher.subscribe(DomainEventKind::TodoListCompleted, recorder.clone());
    let repository =
        SqliteTodoListRepository::with_dispatcher(pool().await, Arc::new(dispatcher));

    let mut list = groceries();
    let item_ids: Vec<_> = list.items().iter().map(TodoItem::id).collect();
    repository.add(&mut list).await.unwrap();

    let mut list = repository.find(list.id()).await.unwrap().unwrap();
    assert!(list.mark_item_as_completed(item_ids[0]));
    repository.save(&mut list).await.unwrap();
    assert!(recorder.seen().is_empty());

    let mut list = repository.find(list.id()).await.unwrap().unwrap();
    assert!(list.mark_item_as_completed(item_ids[1]));
    repository.save(&mut list).await.unwrap();

    // The flush drained the buffer and delivered the single rollup event.
    assert!(list.domain_events().is_empty());
    let seen = recorder.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(
        seen[0].payload(),
        &DomainEventPayload::TodoListCompleted { list_id: list.id() }
    );

    // A further save of the already-completed aggregate publishes nothing.
    repository.save(&mut list).await.unwrap();
    assert_eq!(recorder.seen().len(), 1);

    let stored = repository.find(list.id()).await.unwrap().unwrap();
    assert!(stored.completed());
    assert!(stored.date_completed().is_some());
    assert!(stored.items().iter().all(TodoItem::completed));
}

#[tokio::test]
async fn without_a_dispatcher_events_stay_pending_on_the_aggregate() {
    let repository = SqliteTodoListRepository::new(pool().await);
    let mut list = groceries();
    let item_ids: Vec<_> = list.items().iter().map(TodoItem::id).collect();
    repository.add(&mut list).await.unwrap();

    let mut list = repository.find(list.id()).await.unwrap().unwrap();
    assert!(list.mark_item_as_completed(item_ids[0]));
    assert!(list.mark_item_as_completed(item_ids[1]));
    repository.save(&mut list).await.unwrap();

    assert_eq!(list.domain_events().len(), 1);
    assert!(repository.find(list.id()).await.unwrap().unwrap().completed());
}

#[tokio::test]
async fn failed_publish_surfaces_after_the_write_is_durable() {
    let mut dispatcher = DomainEventDispatcher::new();
    dispatcher.subscribe(DomainEventKind::TodoListCompleted, Arc::new(FailingSubscriber));
    let repository =
        SqliteTodoListRepository::with_dispatcher(pool().await, Arc::new(dispatcher));

    let mut list = groceries();
    let item_ids: Vec<_> = list.items().iter().map(TodoItem::id).collect();
    repository.add(&mut list).await.unwrap();

    let mut list = repository.find(list.id()).await.unwrap().unwrap();
    assert!(list.mark_item_as_completed(item_ids[0]));
    assert!(list.mark_item_as_completed(item_ids[1]));

    let err = repository.save(&mut list).await.unwrap_err();
    assert!(matches!(err, RepositoryError::DispatchFailed { .. }));

    // Data committed before the dispatch step; the event was drained and is
    // not retried by a later save.
    assert!(list.domain_events().is_empty());
    assert!(repository.find(list.id()).await.unwrap().unwrap().completed());
    repository.save(&mut list).await.unwrap();
}
