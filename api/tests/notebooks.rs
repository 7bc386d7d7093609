mod common;

use api::notebooks::{self, NotebookDraft};
use api::notes::{self, NoteDraft};
use api::ServiceError;

use common::{draft, test_pool, user};

fn name(name: &str) -> NotebookDraft {
    NotebookDraft {
        name: name.to_string(),
    }
}

#[tokio::test]
async fn create_and_list_sorted_by_name() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;

    notebooks::create_notebook(&pool, &alice, name("Work")).await.unwrap();
    notebooks::create_notebook(&pool, &alice, name("Home")).await.unwrap();

    let listing = notebooks::list_notebooks(&pool, &alice).await.unwrap();
    let names: Vec<&str> = listing.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Home", "Work"]);
}

#[tokio::test]
async fn duplicate_name_is_rejected_per_user() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;

    notebooks::create_notebook(&pool, &alice, name("Work")).await.unwrap();
    let err = notebooks::create_notebook(&pool, &alice, name("Work"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    // A different user can reuse the name.
    notebooks::create_notebook(&pool, &bob, name("Work")).await.unwrap();
}

#[tokio::test]
async fn rename_keeps_current_name_valid() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;

    let nb = notebooks::create_notebook(&pool, &alice, name("Drafts")).await.unwrap();
    notebooks::create_notebook(&pool, &alice, name("Work")).await.unwrap();

    // Saving under the unchanged name is not a collision.
    let renamed = notebooks::rename_notebook(&pool, &alice, nb.id, name("Drafts"))
        .await
        .unwrap();
    assert_eq!(renamed.name, "Drafts");

    let err = notebooks::rename_notebook(&pool, &alice, nb.id, name("Work"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn someone_elses_notebook_reads_as_missing() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;

    let nb = notebooks::create_notebook(&pool, &alice, name("Private")).await.unwrap();

    let err = notebooks::rename_notebook(&pool, &bob, nb.id, name("Stolen"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound));

    let err = notebooks::notes_in_notebook(&pool, &bob, nb.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound));
}

#[tokio::test]
async fn delete_unfiles_contained_notes() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;

    let nb = notebooks::create_notebook(&pool, &alice, name("Work")).await.unwrap();
    let saved = notes::create_note(
        &pool,
        &alice,
        NoteDraft {
            notebook_id: Some(nb.id),
            ..draft("Standup notes", "yesterday, today")
        },
    )
    .await
    .unwrap();
    assert_eq!(saved.note.notebook_id, Some(nb.id));

    notebooks::delete_notebook(&pool, &alice, nb.id).await.unwrap();

    let detail = notes::get_note(&pool, &alice, saved.note.id).await.unwrap();
    assert_eq!(detail.note.notebook_id, None);
}

#[tokio::test]
async fn notebook_listing_shows_its_notes_only() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;

    let nb = notebooks::create_notebook(&pool, &alice, name("Work")).await.unwrap();
    let filed = notes::create_note(
        &pool,
        &alice,
        NoteDraft {
            notebook_id: Some(nb.id),
            ..draft("Filed", "body")
        },
    )
    .await
    .unwrap();
    notes::create_note(&pool, &alice, draft("Unfiled", "body"))
        .await
        .unwrap();

    let listing = notebooks::notes_in_notebook(&pool, &alice, nb.id).await.unwrap();
    assert_eq!(listing.notebook.name, "Work");
    assert_eq!(listing.notes.len(), 1);
    assert_eq!(listing.notes[0].id, filed.note.id);
}

#[tokio::test]
async fn name_length_is_validated() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;

    let err = notebooks::create_notebook(&pool, &alice, name("  "))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = notebooks::create_notebook(&pool, &alice, name(&"n".repeat(101)))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}
