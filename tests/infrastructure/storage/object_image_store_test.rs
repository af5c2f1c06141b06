use bytes::Bytes;
use tempfile::TempDir;

use vitrine::application::ports::{ImageStore, ImageStoreError};
use vitrine::domain::{ImageId, StoragePath};
use vitrine::infrastructure::storage::ObjectImageStore;

use crate::helpers::png_bytes;

#[tokio::test]
async fn given_local_store_when_putting_then_file_lands_under_user_images() {
    let dir = TempDir::new().unwrap();
    let store = ObjectImageStore::local(dir.path().join("media")).unwrap();
    let id = ImageId::new();
    let path = StoragePath::new(&id, "cat.png");

    let size = store.put(&path, Bytes::from(png_bytes())).await.unwrap();

    assert_eq!(size, png_bytes().len() as u64);
    let on_disk = dir
        .path()
        .join("media")
        .join("user_images")
        .join(id.to_string())
        .join("cat.png");
    assert_eq!(std::fs::read(on_disk).unwrap(), png_bytes());
    assert_eq!(store.fetch(&path).await.unwrap(), Bytes::from(png_bytes()));
}

#[tokio::test]
async fn given_deleted_image_when_fetching_then_not_found() {
    let dir = TempDir::new().unwrap();
    let store = ObjectImageStore::local(dir.path().to_path_buf()).unwrap();
    let path = StoragePath::new(&ImageId::new(), "cat.png");
    store.put(&path, Bytes::from(png_bytes())).await.unwrap();

    store.delete(&path).await.unwrap();

    assert!(matches!(
        store.fetch(&path).await,
        Err(ImageStoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn given_in_memory_store_when_fetching_missing_path_then_not_found() {
    let store = ObjectImageStore::in_memory();

    let result = store
        .fetch(&StoragePath::from_raw("user_images/nothing/here.png"))
        .await;

    assert!(matches!(result, Err(ImageStoreError::NotFound(_))));
}
