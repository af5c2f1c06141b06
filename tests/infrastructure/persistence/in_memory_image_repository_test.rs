use vitrine::application::ports::{ImageRepository, RepositoryError};
use vitrine::domain::{ImageRecord, ProcessingStatus};
use vitrine::infrastructure::persistence::InMemoryImageRepository;

use crate::helpers::owner;

#[tokio::test]
async fn given_created_record_when_getting_for_owner_then_returns_it() {
    let repository = InMemoryImageRepository::new();
    let record = ImageRecord::new(owner("alice"), "cat.png");

    repository.create(&record).await.unwrap();

    let found = repository
        .get_for_owner(record.id, &owner("alice"))
        .await
        .unwrap();
    assert_eq!(found, Some(record));
}

#[tokio::test]
async fn given_other_owner_when_getting_then_returns_none() {
    let repository = InMemoryImageRepository::new();
    let record = ImageRecord::new(owner("alice"), "cat.png");
    repository.create(&record).await.unwrap();

    let found = repository
        .get_for_owner(record.id, &owner("bob"))
        .await
        .unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn given_duplicate_id_when_creating_then_returns_error() {
    let repository = InMemoryImageRepository::new();
    let record = ImageRecord::new(owner("alice"), "cat.png");
    repository.create(&record).await.unwrap();

    let result = repository.create(&record).await;

    assert!(matches!(result, Err(RepositoryError::QueryFailed(_))));
}

#[tokio::test]
async fn given_status_change_when_updating_then_caption_and_status_are_stored() {
    let repository = InMemoryImageRepository::new();
    let mut record = ImageRecord::new(owner("alice"), "cat.png");
    repository.create(&record).await.unwrap();

    record.start_processing();
    record.finish(Some("A dog running".to_string()));
    repository.update(&record).await.unwrap();

    let found = repository
        .get_for_owner(record.id, &owner("alice"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.status, ProcessingStatus::Completed);
    assert_eq!(found.caption.as_deref(), Some("A dog running"));
}

#[tokio::test]
async fn given_unknown_record_when_updating_then_returns_not_found() {
    let repository = InMemoryImageRepository::new();
    let record = ImageRecord::new(owner("alice"), "cat.png");

    let result = repository.update(&record).await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));
}

#[tokio::test]
async fn given_several_uploads_when_listing_then_newest_first() {
    let repository = InMemoryImageRepository::new();
    let mut older = ImageRecord::new(owner("alice"), "old.png");
    older.uploaded_at -= chrono::Duration::minutes(5);
    let newer = ImageRecord::new(owner("alice"), "new.png");
    let foreign = ImageRecord::new(owner("bob"), "bob.png");
    repository.create(&older).await.unwrap();
    repository.create(&newer).await.unwrap();
    repository.create(&foreign).await.unwrap();

    let listed = repository.list_for_owner(&owner("alice")).await.unwrap();

    assert_eq!(listed, vec![newer, older]);
}

#[tokio::test]
async fn given_owner_mismatch_when_deleting_then_record_survives() {
    let repository = InMemoryImageRepository::new();
    let record = ImageRecord::new(owner("alice"), "cat.png");
    repository.create(&record).await.unwrap();

    assert!(!repository.delete_for_owner(record.id, &owner("bob")).await.unwrap());
    assert!(repository.delete_for_owner(record.id, &owner("alice")).await.unwrap());
    assert!(
        repository
            .get_for_owner(record.id, &owner("alice"))
            .await
            .unwrap()
            .is_none()
    );
}
