use callbridge::application::ports::AudioHost;
use callbridge::infrastructure::storage::LocalDirAudioHost;

#[tokio::test]
async fn given_local_artifact_when_publishing_then_bytes_land_under_served_dir() {
    let served_dir = tempfile::tempdir().unwrap();
    let staging_dir = tempfile::tempdir().unwrap();
    let host = LocalDirAudioHost::new(
        served_dir.path().to_path_buf(),
        "https://calls.example.com/".to_string(),
    )
    .unwrap();

    let artifact = staging_dir.path().join("reply.mp3");
    std::fs::write(&artifact, b"ID3 reply audio").unwrap();

    let url = host.publish(&artifact).await.unwrap();

    assert!(url.starts_with("https://calls.example.com/audio/"));
    assert!(url.ends_with(".mp3"));

    let name = url.rsplit('/').next().unwrap();
    let published = served_dir.path().join(name);
    assert_eq!(std::fs::read(published).unwrap(), b"ID3 reply audio");
}

#[tokio::test]
async fn given_two_publishes_when_hosting_then_urls_are_unique() {
    let served_dir = tempfile::tempdir().unwrap();
    let staging_dir = tempfile::tempdir().unwrap();
    let host = LocalDirAudioHost::new(
        served_dir.path().to_path_buf(),
        "https://calls.example.com".to_string(),
    )
    .unwrap();

    let artifact = staging_dir.path().join("reply.mp3");
    std::fs::write(&artifact, b"audio").unwrap();

    let first = host.publish(&artifact).await.unwrap();
    let second = host.publish(&artifact).await.unwrap();

    assert_ne!(first, second);
}

#[tokio::test]
async fn given_missing_artifact_when_publishing_then_fails_with_io_error() {
    let served_dir = tempfile::tempdir().unwrap();
    let host = LocalDirAudioHost::new(
        served_dir.path().to_path_buf(),
        "https://calls.example.com".to_string(),
    )
    .unwrap();

    let missing = served_dir.path().join("does-not-exist.mp3");
    let result = host.publish(&missing).await;

    assert!(matches!(
        result,
        Err(callbridge::application::ports::HostingError::Io(_))
    ));
}
