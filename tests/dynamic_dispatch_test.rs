use receipt_processor::application::service::ReceiptService;
use receipt_processor::domain::ports::ReceiptStoreBox;
use receipt_processor::infrastructure::in_memory::InMemoryReceiptStore;
use std::sync::Arc;

mod common;

#[tokio::test]
async fn test_store_as_trait_object() {
    let store: ReceiptStoreBox = Box::new(InMemoryReceiptStore::new());
    let receipt = common::target_receipt();

    // Verify Send + Sync by moving the boxed store into a task
    let handle = tokio::spawn(async move {
        let id = store.create(receipt).await.unwrap();
        store.get(&id).await.unwrap().unwrap()
    });

    let retrieved = handle.await.unwrap();
    assert_eq!(retrieved, common::target_receipt());
}

#[tokio::test]
async fn test_service_shared_across_tasks() {
    let service = Arc::new(ReceiptService::new(Box::new(InMemoryReceiptStore::new())));

    let writer = Arc::clone(&service);
    let id = tokio::spawn(async move {
        writer
            .process_receipt(common::corner_market_receipt())
            .await
            .unwrap()
    })
    .await
    .unwrap();

    let reader = Arc::clone(&service);
    let points = tokio::spawn(async move { reader.get_points(&id).await.unwrap() })
        .await
        .unwrap();
    assert_eq!(points, 109);
}
