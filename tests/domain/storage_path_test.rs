use vitrine::domain::{ImageId, StoragePath};

#[test]
fn given_image_id_and_filename_when_creating_path_then_format_is_prefix_uuid_filename() {
    let image_id = ImageId::new();
    let path = StoragePath::new(&image_id, "holiday.jpg");

    let expected = format!("user_images/{}/holiday.jpg", image_id.as_uuid());
    assert_eq!(path.as_str(), expected);
}

#[test]
fn given_filename_with_separators_when_creating_path_then_stays_one_segment() {
    let image_id = ImageId::new();
    let path = StoragePath::new(&image_id, "../../etc/passwd");

    assert_eq!(
        path.as_str(),
        format!("user_images/{}/.._.._etc_passwd", image_id.as_uuid())
    );
}

#[test]
fn given_blank_filename_when_creating_path_then_uses_fallback_name() {
    let image_id = ImageId::new();

    assert!(StoragePath::new(&image_id, "  ").as_str().ends_with("/upload"));
    assert!(StoragePath::new(&image_id, "..").as_str().ends_with("/upload"));
}

#[test]
fn given_storage_path_when_displayed_then_matches_as_str() {
    let path = StoragePath::new(&ImageId::new(), "test.png");

    assert_eq!(format!("{}", path), path.as_str());
}
