use std::collections::HashSet;
use taskdeck_core::{
    KeyValueBackend, ManualClock, MemoryBackend, PersistentStore, SqliteBackend, Task, TaskId,
    TaskRepository, ITEMS_KEY,
};

const T0: i64 = 1_700_000_000_000;

fn memory_repo(
    clock: &ManualClock,
) -> (MemoryBackend, TaskRepository<MemoryBackend, &ManualClock>) {
    let backend = MemoryBackend::new();
    let repo = TaskRepository::load(PersistentStore::new(backend.clone()), clock);
    (backend, repo)
}

fn titles<B: KeyValueBackend, C: taskdeck_core::Clock>(
    repo: &TaskRepository<B, C>,
) -> Vec<&str> {
    repo.items().iter().map(|task| task.title.as_str()).collect()
}

#[test]
fn add_stores_trimmed_title_as_pending_task() {
    let clock = ManualClock::new(T0);
    let (_, mut repo) = memory_repo(&clock);

    let id = repo.add("  Buy milk\t").unwrap();

    let task = repo.get(&id).unwrap();
    assert_eq!(task.title, "Buy milk");
    assert!(!task.done);
    assert_eq!(task.created, T0);
    assert_eq!(repo.pending_count(), 1);
}

#[test]
fn add_rejects_blank_titles_without_persisting() {
    let clock = ManualClock::new(T0);
    let (backend, mut repo) = memory_repo(&clock);

    assert!(repo.add("").is_none());
    assert!(repo.add("   \n ").is_none());
    assert!(repo.is_empty());
    assert!(backend.is_empty());
}

#[test]
fn add_inserts_most_recent_first() {
    let clock = ManualClock::new(T0);
    let (_, mut repo) = memory_repo(&clock);

    repo.add("A").unwrap();
    clock.advance_secs(1);
    repo.add("B").unwrap();

    assert_eq!(titles(&repo), vec!["B", "A"]);
}

#[test]
fn generated_ids_are_unique() {
    let clock = ManualClock::new(T0);
    let (_, mut repo) = memory_repo(&clock);

    let ids: HashSet<TaskId> = (0..200)
        .map(|index| repo.add(&format!("task {index}")).unwrap())
        .collect();
    assert_eq!(ids.len(), 200);
}

#[test]
fn toggle_flips_twice_back_to_original() {
    let clock = ManualClock::new(T0);
    let (_, mut repo) = memory_repo(&clock);
    let id = repo.add("walk").unwrap();

    assert!(repo.toggle(&id, None));
    assert!(repo.get(&id).unwrap().done);
    assert!(repo.toggle(&id, None));
    assert!(!repo.get(&id).unwrap().done);
}

#[test]
fn toggle_with_explicit_value_sets_it() {
    let clock = ManualClock::new(T0);
    let (_, mut repo) = memory_repo(&clock);
    let id = repo.add("walk").unwrap();

    assert!(repo.toggle(&id, Some(true)));
    assert!(repo.toggle(&id, Some(true)));
    assert!(repo.get(&id).unwrap().done);
    assert_eq!(repo.pending_count(), 0);
}

#[test]
fn toggle_unknown_id_is_a_no_op() {
    let clock = ManualClock::new(T0);
    let (_, mut repo) = memory_repo(&clock);
    repo.add("walk").unwrap();
    let before = repo.items().to_vec();

    assert!(!repo.toggle(&TaskId::from("missing"), None));
    assert_eq!(repo.items(), before.as_slice());
}

#[test]
fn remove_deletes_and_is_idempotent() {
    let clock = ManualClock::new(T0);
    let (_, mut repo) = memory_repo(&clock);
    let keep = repo.add("keep").unwrap();
    let drop_id = repo.add("drop").unwrap();

    assert!(repo.remove(&drop_id));
    assert!(repo.get(&drop_id).is_none());

    let before = repo.items().to_vec();
    assert!(!repo.remove(&drop_id));
    assert!(!repo.remove(&TaskId::from("never-existed")));
    assert_eq!(repo.items(), before.as_slice());
    assert!(repo.get(&keep).is_some());
}

#[test]
fn clear_completed_keeps_pending_tasks_in_order() {
    let clock = ManualClock::new(T0);
    let (_, mut repo) = memory_repo(&clock);
    let a = repo.add("a").unwrap();
    let b = repo.add("b").unwrap();
    repo.add("c").unwrap();
    repo.toggle(&a, None);
    repo.toggle(&b, None);

    assert!(repo.has_completed());
    assert_eq!(repo.clear_completed(), 2);
    assert_eq!(titles(&repo), vec!["c"]);
    assert!(!repo.has_completed());
}

#[test]
fn clear_all_empties_list_and_persists() {
    let clock = ManualClock::new(T0);
    let (backend, mut repo) = memory_repo(&clock);
    repo.add("a").unwrap();
    repo.add("b").unwrap();

    assert_eq!(repo.clear_all(), 2);
    assert!(repo.is_empty());
    assert_eq!(backend.get(ITEMS_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn every_mutation_writes_the_full_list() {
    let clock = ManualClock::new(T0);
    let (backend, mut repo) = memory_repo(&clock);
    let id = repo.add("persist me").unwrap();
    repo.toggle(&id, None);

    let raw = backend.get(ITEMS_KEY).unwrap().unwrap();
    let stored: Vec<Task> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, repo.items());
}

#[test]
fn persisted_list_uses_expected_wire_fields() {
    let clock = ManualClock::new(T0);
    let (backend, mut repo) = memory_repo(&clock);
    let id = repo.add("wire").unwrap();

    let raw = backend.get(ITEMS_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": id.as_str(),
            "title": "wire",
            "done": false,
            "created": T0,
        }])
    );
}

#[test]
fn reload_from_sqlite_reproduces_equal_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskdeck.sqlite3");
    let clock = ManualClock::new(T0);

    let original = {
        let backend = SqliteBackend::open(&path).unwrap();
        let mut repo = TaskRepository::load(PersistentStore::new(backend), &clock);
        let first = repo.add("first").unwrap();
        clock.advance_secs(90);
        repo.add("second").unwrap();
        repo.toggle(&first, None);
        repo.items().to_vec()
    };

    let backend = SqliteBackend::open(&path).unwrap();
    let reloaded = TaskRepository::load(PersistentStore::new(backend), &clock);
    assert_eq!(reloaded.items(), original.as_slice());
}

#[test]
fn corrupt_stored_list_falls_back_to_empty() {
    let backend = MemoryBackend::new();
    backend.set(ITEMS_KEY, "[{\"id\": \"x\", \"title\": ").unwrap();

    let clock = ManualClock::new(T0);
    let repo = TaskRepository::load(PersistentStore::new(backend), &clock);
    assert!(repo.is_empty());
}

#[test]
fn legacy_hex_ids_are_accepted() {
    let backend = MemoryBackend::new();
    backend
        .set(
            ITEMS_KEY,
            r#"[{"id":"1f3a9c0d2b4e","title":"old","done":true,"created":1600000000000}]"#,
        )
        .unwrap();

    let clock = ManualClock::new(T0);
    let mut repo = TaskRepository::load(PersistentStore::new(backend), &clock);
    let legacy = TaskId::from("1f3a9c0d2b4e");
    assert!(repo.get(&legacy).unwrap().done);
    assert!(repo.toggle(&legacy, None));
    assert_eq!(repo.pending_count(), 1);
}

#[test]
fn write_failures_leave_memory_state_intact() {
    let backend = MemoryBackend::with_quota(16);
    let clock = ManualClock::new(T0);
    let mut repo = TaskRepository::load(PersistentStore::new(backend.clone()), &clock);

    let id = repo.add("a title far longer than the quota allows").unwrap();
    assert!(repo.get(&id).is_some());
    assert!(backend.get(ITEMS_KEY).unwrap().is_none());
}
