mod common;

use api::transfer;
use api::ServiceError;

use common::{note, test_pool, user};

#[tokio::test]
async fn markdown_export_prepends_the_title() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;
    let note_id = note(&pool, &alice, "My Trip Plan").await;

    let export = transfer::export_markdown(&pool, &alice, note_id).await.unwrap();
    assert_eq!(export.filename, "My_Trip_Plan.md");
    assert_eq!(export.media_type, "text/markdown; charset=utf-8");
    let body = String::from_utf8(export.bytes).unwrap();
    assert!(body.starts_with("# My Trip Plan\n\n"));
}

#[tokio::test]
async fn html_export_is_a_standalone_document() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;
    let note_id = note(&pool, &alice, "Styled").await;

    let export = transfer::export_html(&pool, &alice, note_id).await.unwrap();
    assert_eq!(export.filename, "Styled.html");
    let body = String::from_utf8(export.bytes).unwrap();
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("<title>Styled</title>"));
}

#[tokio::test]
async fn collaborators_can_export_but_strangers_cannot() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;
    let mallory = user(&pool, "mallory").await;
    let note_id = note(&pool, &alice, "Shared doc").await;
    api::sharing::share_note(&pool, &alice, note_id, "bob")
        .await
        .unwrap();

    transfer::export_markdown(&pool, &bob, note_id).await.unwrap();

    let err = transfer::export_markdown(&pool, &mallory, note_id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Forbidden));
}

#[tokio::test]
async fn import_takes_the_title_from_a_leading_heading() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;

    let info = transfer::import_note(&pool, &alice, "trip.md", b"# My Notes\ncontent here")
        .await
        .unwrap();
    assert_eq!(info.title, "My Notes");
    assert_eq!(info.content, "content here");
    assert_eq!(info.notebook_id, None);
    assert!(info.tags.is_empty());
}

#[tokio::test]
async fn import_without_heading_uses_the_filename() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;

    let info = transfer::import_note(&pool, &alice, "todo.txt", b"buy milk")
        .await
        .unwrap();
    assert_eq!(info.title, "Import: todo.txt");
    assert_eq!(info.content, "buy milk");
}

#[tokio::test]
async fn import_rejects_disallowed_extensions() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;

    for filename in ["image.png", "archive.tar.gz", "README"] {
        let err = transfer::import_note(&pool, &alice, filename, b"data")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)), "{filename}");
    }
}

#[tokio::test]
async fn import_rejects_binary_data() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;

    let err = transfer::import_note(&pool, &alice, "note.md", &[0xff, 0xfe, 0x00])
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Decoding));
}

#[tokio::test]
async fn awkward_titles_produce_safe_filenames() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;
    let note_id = note(&pool, &alice, "???").await;

    let export = transfer::export_markdown(&pool, &alice, note_id).await.unwrap();
    assert_eq!(export.filename, "note.md");
}
