use pourtrait_model::{Category, Confidence, MatchedEntry, ResolutionRecord};
use pourtrait_store::{StockRepository, StoredStock};

fn sample_records() -> Vec<ResolutionRecord> {
    vec![
        ResolutionRecord::resolved(
            "Guinness Draught",
            MatchedEntry {
                category: Category::Beer,
                entry_id: 1,
                confidence: Confidence::Exact,
            },
        ),
        ResolutionRecord::resolved(
            "guinness draft",
            MatchedEntry {
                category: Category::Beer,
                entry_id: 1,
                confidence: Confidence::Corrected,
            },
        ),
        ResolutionRecord::unresolved("mystery swill"),
    ]
}

#[test]
fn repository_save_and_load() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let repo = StockRepository::new(dir.path()).expect("create repo");

    let path = repo.save("alice", &sample_records()).expect("save stock");
    assert!(path.exists());
    assert!(path.to_string_lossy().contains("ALICE.json"));

    let loaded = repo
        .load("alice")
        .expect("load stock")
        .expect("stock should exist");
    assert_eq!(loaded.owner, "alice");
    assert_eq!(loaded.records.len(), 3);
    assert_eq!(loaded.unresolved_count(), 1);
    assert_eq!(loaded.records, sample_records());
    assert!(!loaded.saved_at.is_empty());
}

#[test]
fn repository_load_nonexistent() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let repo = StockRepository::new(dir.path()).expect("create repo");

    let loaded = repo.load("nobody").expect("load attempt");
    assert!(loaded.is_none());
}

#[test]
fn owner_lookup_ignores_case_and_punctuation() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let repo = StockRepository::new(dir.path()).expect("create repo");

    repo.save("Bob Smith", &sample_records()).expect("save");
    assert!(repo.exists("bob smith"));
    assert!(repo.exists("BOB-SMITH"));
    assert!(!repo.exists("bob"));

    let loaded = repo.load("bob.smith").expect("load").expect("exists");
    assert_eq!(loaded.owner, "Bob Smith");
}

#[test]
fn save_replaces_the_previous_batch() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let repo = StockRepository::new(dir.path()).expect("create repo");

    repo.save("alice", &sample_records()).expect("first save");
    let replacement = vec![ResolutionRecord::unresolved("only line")];
    repo.save("alice", &replacement).expect("second save");

    let loaded = repo.load("alice").expect("load").expect("exists");
    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.records[0].raw_text, "only line");

    // Still exactly one file for the owner.
    assert_eq!(repo.list().expect("list").len(), 1);
}

#[test]
fn repository_delete() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let repo = StockRepository::new(dir.path()).expect("create repo");

    repo.save("alice", &sample_records()).expect("save");
    assert!(repo.delete("alice").expect("delete"));
    assert!(!repo.exists("alice"));
    assert!(!repo.delete("alice").expect("second delete"));
}

#[test]
fn list_reports_counts_sorted_by_owner() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let repo = StockRepository::new(dir.path()).expect("create repo");

    repo.save("zoe", &sample_records()).expect("save zoe");
    repo.save("alice", &[ResolutionRecord::unresolved("line")])
        .expect("save alice");

    let listed = repo.list().expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].owner, "alice");
    assert_eq!(listed[0].record_count, 1);
    assert_eq!(listed[0].unresolved_count, 1);
    assert_eq!(listed[1].owner, "zoe");
    assert_eq!(listed[1].record_count, 3);
    assert_eq!(listed[1].unresolved_count, 1);
}

#[test]
fn stored_stock_round_trips_through_json() {
    let stored = StoredStock::new("carol", sample_records());
    let json = serde_json::to_string(&stored).expect("serialize");
    let round: StoredStock = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(round, stored);
}
