use bytes::Bytes;
use tempfile::TempDir;

use taxdoc_analyzer::application::ports::{FileStore, FileStoreError};
use taxdoc_analyzer::domain::StoragePath;
use taxdoc_analyzer::infrastructure::storage::ObjectFileStore;

#[tokio::test]
async fn given_local_store_when_storing_then_file_lands_under_owner_and_category() {
    let dir = TempDir::new().unwrap();
    let store = ObjectFileStore::local(dir.path().to_path_buf()).unwrap();
    let path = StoragePath::new("user-1", "balance-sheet", "stored.pdf");

    let written = store
        .store(&path, Bytes::from_static(b"%PDF-1.4"))
        .await
        .unwrap();

    assert_eq!(written, 8);
    let on_disk = std::fs::read(dir.path().join("user-1/balance-sheet/stored.pdf")).unwrap();
    assert_eq!(on_disk, b"%PDF-1.4");
}

#[tokio::test]
async fn given_stored_file_when_fetching_then_returns_content() {
    let dir = TempDir::new().unwrap();
    let store = ObjectFileStore::local(dir.path().to_path_buf()).unwrap();
    let path = StoragePath::new("user-1", "profit-loss", "p.csv");
    store
        .store(&path, Bytes::from_static(b"a,b\n1,2"))
        .await
        .unwrap();

    let content = store.fetch(&path).await.unwrap();

    assert_eq!(content, b"a,b\n1,2");
}

#[tokio::test]
async fn given_missing_file_when_fetching_then_returns_not_found() {
    let store = ObjectFileStore::in_memory();
    let path = StoragePath::new("nobody", "balance-sheet", "missing.pdf");

    let result = store.fetch(&path).await;

    assert!(matches!(result, Err(FileStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_stored_file_when_deleting_then_file_is_gone() {
    let dir = TempDir::new().unwrap();
    let store = ObjectFileStore::local(dir.path().to_path_buf()).unwrap();
    let path = StoragePath::new("user-1", "debt-schedule", "d.pdf");
    store.store(&path, Bytes::from_static(b"x")).await.unwrap();

    store.delete(&path).await.unwrap();

    assert!(!dir.path().join("user-1/debt-schedule/d.pdf").exists());
    assert!(matches!(
        store.fetch(&path).await,
        Err(FileStoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn given_missing_upload_dir_when_creating_local_store_then_directory_is_created() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("nested/uploads");

    ObjectFileStore::local(base.clone()).unwrap();

    assert!(base.is_dir());
}
