use super::*;

#[tokio::test]
async fn insert_guest_assigns_distinct_tokens() {
    let db_pool = test_pool().await;
    let ama = insert_guest(&db_pool, "Ama").await.unwrap().unwrap();
    let kofi = insert_guest(&db_pool, "Kofi").await.unwrap().unwrap();
    assert_eq!(ama.name, "Ama");
    assert_ne!(ama.uuid, kofi.uuid);
}

#[tokio::test]
async fn insert_guest_rejects_taken_name() {
    let db_pool = test_pool().await;
    let first = insert_guest(&db_pool, "Ama").await.unwrap().unwrap();
    assert!(insert_guest(&db_pool, "Ama").await.unwrap().is_none());

    let stored = find_guest(&db_pool, "Ama").await.unwrap().unwrap();
    assert_eq!(stored, first);
    assert_eq!(guest_names(&db_pool).await.unwrap(), vec!["Ama".to_owned()]);
}

#[tokio::test]
async fn names_are_case_sensitive() {
    let db_pool = test_pool().await;
    assert!(insert_guest(&db_pool, "ama").await.unwrap().is_some());
    assert!(insert_guest(&db_pool, "Ama").await.unwrap().is_some());
    assert!(find_guest(&db_pool, "AMA").await.unwrap().is_none());
}

#[tokio::test]
async fn guest_names_follow_insertion_order() {
    let db_pool = test_pool().await;
    for name in ["Zed", "Abe", "Mia"] {
        insert_guest(&db_pool, name).await.unwrap();
    }
    assert_eq!(guest_names(&db_pool).await.unwrap(), vec!["Zed", "Abe", "Mia"]);
}

#[tokio::test]
async fn batches_keep_urls_verbatim_and_in_order() {
    let db_pool = test_pool().await;
    let first = insert_batch(&db_pool, &["b.jpg".into(), "a.jpg".into()]).await.unwrap();
    let second = insert_batch(&db_pool, &[]).await.unwrap();
    assert!(second.id > first.id);

    let batches = all_batches(&db_pool).await.unwrap();
    assert_eq!(batches, vec![first, second]);
    assert_eq!(batches[0].image_urls, vec!["b.jpg", "a.jpg"]);
    assert!(batches[1].image_urls.is_empty());
}
