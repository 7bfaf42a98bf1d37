use crate::database::sqlite::SqliteRepository;
use crate::database::PageStore;
use crate::dispatcher::client::QueueClient;
use crate::dispatcher::worker::start_store_worker;
use crate::dispatcher::{Action, DispatchError, Dispatcher};
use crate::tests::unit_sqlite_page_store::setup_test_pool;
use std::sync::Arc;
use std::time::Duration;

const TEST_ADDRESS: &str = "wikidb.queue";

// wire a real repository behind the dispatcher, the way main does
async fn setup_queue_backed_store() -> QueueClient {
    let dispatcher = Arc::new(Dispatcher::new(Duration::from_secs(2)));
    let rx = dispatcher.register(TEST_ADDRESS);

    let repo = SqliteRepository::new(setup_test_pool().await);
    start_store_worker(repo, rx);

    QueueClient::new(dispatcher, TEST_ADDRESS.to_string())
}

// every storage operation round-trips through the envelope protocol
#[tokio::test]
async fn test_full_lifecycle_over_the_queue() {
    let store = setup_queue_backed_store().await;

    let id = store
        .create_page("Home", "# Hi")
        .await
        .expect("Should create over the queue");

    let lookup = store.get_page("Home").await.unwrap();
    assert!(lookup.found);
    assert_eq!(lookup.id, id);
    assert_eq!(lookup.raw_content, "# Hi");

    store.save_page(id, "changed").await.unwrap();
    assert_eq!(store.get_page("Home").await.unwrap().raw_content, "changed");

    assert_eq!(store.all_pages().await.unwrap(), vec!["Home"]);

    store.delete_page(id).await.unwrap();
    assert!(!store.get_page("Home").await.unwrap().found);
    assert!(store.all_pages().await.unwrap().is_empty());
}

// a repository failure comes back as exactly one failed reply
#[tokio::test]
async fn test_handler_failure_propagates_to_the_caller() {
    let store = setup_queue_backed_store().await;

    store.create_page("Twin", "one").await.unwrap();
    let result = store.create_page("Twin", "two").await;

    let err = result.expect_err("Duplicate create should fail over the queue");
    assert!(err.downcast_ref::<DispatchError>().is_some());
}

#[tokio::test]
async fn test_request_without_handler_fails() {
    let dispatcher = Dispatcher::new(Duration::from_millis(100));

    let result = dispatcher
        .request("nobody.home", Action::AllPages, serde_json::json!({}))
        .await;

    assert!(matches!(result, Err(DispatchError::NoHandler(_))));
}

// dropping the mailbox makes in-flight requests fail instead of hanging
#[tokio::test]
async fn test_request_to_dropped_handler_fails() {
    let dispatcher = Dispatcher::new(Duration::from_secs(1));
    let rx = dispatcher.register(TEST_ADDRESS);
    drop(rx);

    let result = dispatcher
        .request(TEST_ADDRESS, Action::AllPages, serde_json::json!({}))
        .await;

    assert!(matches!(result, Err(DispatchError::HandlerGone(_))));
}

// a handler that accepts envelopes but never answers trips the timeout
#[tokio::test]
async fn test_unresponsive_handler_times_out() {
    let dispatcher = Dispatcher::new(Duration::from_millis(50));
    let _rx = dispatcher.register(TEST_ADDRESS);

    let result = dispatcher
        .request(TEST_ADDRESS, Action::AllPages, serde_json::json!({}))
        .await;

    assert!(matches!(result, Err(DispatchError::Timeout { .. })));
}
