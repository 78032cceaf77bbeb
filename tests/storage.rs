use lupe_backend::FileStorage;
use tempfile::tempdir;

fn storage_in(root: &std::path::Path) -> FileStorage {
    FileStorage::new(root.join("uploads"), root.join("temp")).expect("storage init failed")
}

#[tokio::test]
async fn save_upload_keeps_extension_and_generates_unique_names() {
    let root = tempdir().unwrap();
    let storage = storage_in(root.path());

    let a = storage.save_upload("song.MP3", b"abc").await.unwrap();
    let b = storage.save_upload("song.mp3", b"def").await.unwrap();

    assert_ne!(a, b, "two uploads must not collide");
    assert_eq!(a.extension().unwrap(), "mp3");
    assert!(a.starts_with(root.path().join("uploads")));
    assert_eq!(std::fs::read(&a).unwrap(), b"abc");
    assert_eq!(std::fs::read(&b).unwrap(), b"def");
}

#[tokio::test]
async fn save_upload_defaults_to_mp3_without_extension() {
    let root = tempdir().unwrap();
    let storage = storage_in(root.path());

    let path = storage.save_upload("recording", b"bytes").await.unwrap();

    assert_eq!(path.extension().unwrap(), "mp3");
}

#[test]
fn create_temp_dir_allocates_fresh_directories() {
    let root = tempdir().unwrap();
    let storage = storage_in(root.path());

    let a = storage.create_temp_dir().unwrap();
    let b = storage.create_temp_dir().unwrap();

    assert_ne!(a, b);
    assert!(a.is_dir());
    assert!(b.is_dir());
    assert!(a.starts_with(root.path().join("temp")));
}

#[tokio::test]
async fn cleanup_removes_files_and_directories() {
    let root = tempdir().unwrap();
    let storage = storage_in(root.path());

    let file = storage.save_upload("song.wav", b"wav bytes").await.unwrap();
    let dir = storage.create_temp_dir().unwrap();
    std::fs::write(dir.join("nested.wav"), b"stem bytes").unwrap();

    storage.cleanup(&[file.clone(), dir.clone()]).await;

    assert!(!file.exists());
    assert!(!dir.exists());
}

#[tokio::test]
async fn cleanup_ignores_missing_paths() {
    let root = tempdir().unwrap();
    let storage = storage_in(root.path());

    // Must not error or panic; cleanup is best-effort.
    storage
        .cleanup(&[root.path().join("never-created.mp3")])
        .await;
}
