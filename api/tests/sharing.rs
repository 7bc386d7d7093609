mod common;

use api::notes;
use api::sharing;
use api::ServiceError;

use common::{draft, note, test_pool, user};

#[tokio::test]
async fn share_grants_edit_access() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;
    let note_id = note(&pool, &alice, "Shared").await;

    let collaborator = sharing::share_note(&pool, &alice, note_id, "bob")
        .await
        .unwrap();
    assert_eq!(collaborator.id, bob.id);

    let detail = notes::get_note(&pool, &bob, note_id).await.unwrap();
    assert!(!detail.is_author);
    // Collaborators don't see the collaborator list.
    assert!(detail.collaborators.is_empty());

    notes::update_note(&pool, &bob, note_id, draft("Edited by bob", "new body"))
        .await
        .unwrap();
}

#[tokio::test]
async fn share_matches_username_case_insensitively() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "Bob").await;
    let note_id = note(&pool, &alice, "Shared").await;

    let collaborator = sharing::share_note(&pool, &alice, note_id, "bob")
        .await
        .unwrap();
    assert_eq!(collaborator.id, bob.id);
}

#[tokio::test]
async fn share_with_unknown_user_fails() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;
    let note_id = note(&pool, &alice, "Mine").await;

    let err = sharing::share_note(&pool, &alice, note_id, "ghost42")
        .await
        .unwrap_err();
    match err {
        ServiceError::Validation(msg) => assert!(msg.contains("ghost42")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn share_with_self_or_twice_fails() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;
    user(&pool, "bob").await;
    let note_id = note(&pool, &alice, "Mine").await;

    let err = sharing::share_note(&pool, &alice, note_id, "alice")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    sharing::share_note(&pool, &alice, note_id, "bob")
        .await
        .unwrap();
    let err = sharing::share_note(&pool, &alice, note_id, "bob")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn only_the_author_can_share() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;
    user(&pool, "carol").await;
    let note_id = note(&pool, &alice, "Mine").await;

    sharing::share_note(&pool, &alice, note_id, "bob")
        .await
        .unwrap();

    // A collaborator still can't share further.
    let err = sharing::share_note(&pool, &bob, note_id, "carol")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Forbidden));
}

#[tokio::test]
async fn collaborator_edits_cannot_move_the_note() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;

    let alices_nb = api::notebooks::create_notebook(
        &pool,
        &alice,
        api::notebooks::NotebookDraft {
            name: "Work".to_string(),
        },
    )
    .await
    .unwrap();
    let bobs_nb = api::notebooks::create_notebook(
        &pool,
        &bob,
        api::notebooks::NotebookDraft {
            name: "Mine".to_string(),
        },
    )
    .await
    .unwrap();

    let saved = notes::create_note(
        &pool,
        &alice,
        api::notes::NoteDraft {
            notebook_id: Some(alices_nb.id),
            ..draft("Filed", "body")
        },
    )
    .await
    .unwrap();
    sharing::share_note(&pool, &alice, saved.note.id, "bob")
        .await
        .unwrap();

    // Bob's requested notebook is ignored; the note stays where Alice
    // filed it.
    let updated = notes::update_note(
        &pool,
        &bob,
        saved.note.id,
        api::notes::NoteDraft {
            notebook_id: Some(bobs_nb.id),
            ..draft("Filed", "edited body")
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.note.notebook_id, Some(alices_nb.id));
    assert!(updated.warning.is_none());
}

#[tokio::test]
async fn unshare_revokes_access() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;
    let note_id = note(&pool, &alice, "Mine").await;

    sharing::share_note(&pool, &alice, note_id, "bob")
        .await
        .unwrap();
    let outcome = sharing::unshare_note(&pool, &alice, note_id, bob.id)
        .await
        .unwrap();
    assert!(outcome.removed);

    let err = notes::get_note(&pool, &bob, note_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::Forbidden));
}

#[tokio::test]
async fn unshare_of_non_collaborator_is_a_noop() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;
    let note_id = note(&pool, &alice, "Mine").await;

    let outcome = sharing::unshare_note(&pool, &alice, note_id, bob.id)
        .await
        .unwrap();
    assert!(!outcome.removed);
    assert_eq!(outcome.user.id, bob.id);
}

#[tokio::test]
async fn author_sees_collaborator_list() {
    let pool = test_pool().await;
    let alice = user(&pool, "alice").await;
    user(&pool, "bob").await;
    user(&pool, "carol").await;
    let note_id = note(&pool, &alice, "Team notes").await;

    sharing::share_note(&pool, &alice, note_id, "carol")
        .await
        .unwrap();
    sharing::share_note(&pool, &alice, note_id, "bob")
        .await
        .unwrap();

    let detail = notes::get_note(&pool, &alice, note_id).await.unwrap();
    let names: Vec<&str> = detail
        .collaborators
        .iter()
        .map(|u| u.username.as_str())
        .collect();
    assert_eq!(names, vec!["bob", "carol"]);
}
