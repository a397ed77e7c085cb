use super::*;
use crate::traits::AlertStore;

#[tokio::test]
async fn new_alerts_start_unread_and_active() {
    let storage = MemStorage::new();
    seeded_user(&storage, "u1").await;

    let alert = storage.create_alert(new_alert("u1", "Low NDVI detected")).await.unwrap();
    assert!(!alert.is_read);
    assert!(alert.is_active);
}

#[tokio::test]
async fn unread_list_shrinks_after_mark_read() {
    let storage = MemStorage::new();
    seeded_user(&storage, "u1").await;

    let a = storage.create_alert(new_alert("u1", "first")).await.unwrap();
    let b = storage.create_alert(new_alert("u1", "second")).await.unwrap();

    storage.mark_alert_read(&a.id).await.unwrap();

    let unread = storage.unread_alerts("u1").await.unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].id, b.id);

    let all = storage.alerts_by_user("u1").await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn mark_read_is_idempotent() {
    let storage = MemStorage::new();
    seeded_user(&storage, "u1").await;
    let alert = storage.create_alert(new_alert("u1", "once")).await.unwrap();

    storage.mark_alert_read(&alert.id).await.unwrap();
    storage.mark_alert_read(&alert.id).await.unwrap();

    let all = storage.alerts_by_user("u1").await.unwrap();
    assert!(all[0].is_read);
}

#[tokio::test]
async fn mark_read_on_unknown_id_is_a_no_op() {
    let storage = MemStorage::new();
    storage.mark_alert_read("missing").await.unwrap();
}

#[tokio::test]
async fn lists_are_newest_first() {
    let storage = MemStorage::new();
    seeded_user(&storage, "u1").await;

    storage.create_alert(new_alert("u1", "oldest")).await.unwrap();
    storage.create_alert(new_alert("u1", "middle")).await.unwrap();
    storage.create_alert(new_alert("u1", "newest")).await.unwrap();

    let all = storage.alerts_by_user("u1").await.unwrap();
    let titles: Vec<&str> = all.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn alerts_are_scoped_per_user() {
    let storage = MemStorage::new();
    seeded_user(&storage, "u1").await;
    seeded_user(&storage, "u2").await;

    storage.create_alert(new_alert("u1", "mine")).await.unwrap();
    storage.create_alert(new_alert("u2", "theirs")).await.unwrap();

    let mine = storage.alerts_by_user("u1").await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].title, "mine");
}
