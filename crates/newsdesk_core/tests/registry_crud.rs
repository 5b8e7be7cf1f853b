use newsdesk_core::{Article, ArticleId, ArticleRepository, MemoryArticleRepository, RepoError};
use std::sync::Arc;
use std::thread;

fn sample(id: ArticleId, date: &str, tags: &[&str]) -> Article {
    Article::new(
        id,
        format!("Some title {id}"),
        date,
        format!("Some body text {id}"),
        tags.iter().copied(),
    )
    .unwrap()
}

#[test]
fn add_and_get_roundtrip() {
    let repo = MemoryArticleRepository::new();
    let article = sample(0, "2016-09-22", &["tag0", "tag1"]);

    let stored = repo.add(article.clone()).unwrap();
    assert_eq!(stored, article);

    let loaded = repo.get(0).unwrap();
    assert_eq!(loaded, article);
    assert!(repo.exists(0));
}

#[test]
fn add_duplicate_id_is_rejected_and_leaves_registry_unchanged() {
    let repo = MemoryArticleRepository::new();
    let original = sample(0, "2016-09-22", &["tag0"]);
    repo.add(original.clone()).unwrap();

    let conflicting = sample(0, "2016-09-23", &["tag9"]);
    let err = repo.add(conflicting).unwrap_err();
    assert!(matches!(err, RepoError::AlreadyExists(0)));

    // The failed insert must not have touched anything.
    assert_eq!(repo.get_all(), vec![original.clone()]);
    assert_eq!(repo.get(0).unwrap(), original);
}

#[test]
fn get_missing_id_returns_not_found() {
    let repo = MemoryArticleRepository::new();
    repo.add(sample(0, "2016-09-22", &["tag0"])).unwrap();

    let err = repo.get(42).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(42)));
    assert!(!repo.exists(42));
}

#[test]
fn get_all_preserves_insertion_order() {
    let repo = MemoryArticleRepository::new();
    for id in [3, 1, 2] {
        repo.add(sample(id, "2016-09-22", &["tag0"])).unwrap();
    }

    let ids: Vec<_> = repo.get_all().iter().map(|article| article.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn get_all_on_empty_registry_is_empty() {
    let repo = MemoryArticleRepository::new();
    assert!(repo.get_all().is_empty());
}

#[test]
fn concurrent_inserts_of_distinct_ids_all_land() {
    let repo = Arc::new(MemoryArticleRepository::new());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                for offset in 0..50 {
                    let id = worker * 50 + offset;
                    repo.add(sample(id, "2016-09-22", &["tag0"])).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(repo.get_all().len(), 400);
    for id in 0..400 {
        assert!(repo.exists(id));
    }
}
