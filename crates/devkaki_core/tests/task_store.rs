use devkaki_core::{
    InMemoryTaskRepository, ManualClock, Priority, RepoError, Task, TaskSnapshot, TaskStore,
    TaskType, TaskValidationError,
};
use std::sync::{Arc, Mutex};

const T0: i64 = 1_718_020_800_000;

fn store() -> (TaskStore<InMemoryTaskRepository, ManualClock>, ManualClock) {
    let clock = ManualClock::new(T0);
    let store = TaskStore::new(InMemoryTaskRepository::new(), clock.clone());
    (store, clock)
}

fn draft(name: &str) -> Task {
    Task::new(name, TaskType::Feature, Priority::Medium)
}

fn assert_completion_invariant(snapshot: &TaskSnapshot) {
    for task in snapshot.iter() {
        assert_eq!(task.is_completed, task.completed_at.is_some(), "{task:?}");
    }
}

#[test]
fn add_then_get_returns_stored_task_with_fresh_created_at() {
    let (mut store, _) = store();
    let mut task = draft("first");
    task.created_at = 7;

    let added = store.add(task).unwrap();
    assert!(!added.id.is_empty());
    assert_eq!(added.created_at, T0);
    assert_eq!(store.get_by_id(&added.id), Some(&added));
}

#[test]
fn add_keeps_caller_supplied_id_and_rejects_duplicates() {
    let (mut store, _) = store();
    let mut task = draft("first");
    task.id = "fixed".to_string();
    store.add(task.clone()).unwrap();

    let err = store.add(task).unwrap_err();
    assert_eq!(err, RepoError::DuplicateId("fixed".to_string()));
    assert_eq!(store.snapshot().len(), 1);
}

#[test]
fn add_rejects_blank_name() {
    let (mut store, _) = store();
    let err = store.add(draft("   ")).unwrap_err();
    assert_eq!(err, RepoError::Validation(TaskValidationError::BlankName));
    assert!(store.snapshot().is_empty());
}

#[test]
fn update_replaces_in_place_and_keeps_created_at() {
    let (mut store, clock) = store();
    let a = store.add(draft("a")).unwrap();
    let b = store.add(draft("b")).unwrap();
    let c = store.add(draft("c")).unwrap();

    clock.advance_ms(60_000);
    let mut edited = b.clone();
    edited.name = "b2".to_string();
    edited.created_at = 0;
    let stored = store.update(edited).unwrap();
    assert_eq!(stored.created_at, b.created_at);

    let ids: Vec<_> = store.snapshot().iter().map(|t| t.id.clone()).collect();
    assert_eq!(ids, [a.id, b.id.clone(), c.id]);
    assert_eq!(store.get_by_id(&b.id).unwrap().name, "b2");
}

#[test]
fn update_missing_id_is_not_found() {
    let (mut store, _) = store();
    let mut ghost = draft("ghost");
    ghost.id = "missing".to_string();

    let err = store.update(ghost).unwrap_err();
    assert_eq!(err, RepoError::NotFound("missing".to_string()));
    assert_eq!(store.snapshot().version(), 0);
}

#[test]
fn update_rejects_broken_completion_state() {
    let (mut store, _) = store();
    let mut task = store.add(draft("a")).unwrap();
    task.is_completed = true;

    let err = store.update(task).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn delete_is_idempotent() {
    let (mut store, _) = store();
    let a = store.add(draft("a")).unwrap();
    let b = store.add(draft("b")).unwrap();

    assert!(store.delete(&a.id));
    assert_eq!(store.get_by_id(&a.id), None);
    assert!(!store.delete(&a.id));

    let remaining: Vec<_> = store.snapshot().iter().map(|t| t.id.clone()).collect();
    assert_eq!(remaining, [b.id]);
}

#[test]
fn toggle_completion_is_its_own_inverse() {
    let (mut store, clock) = store();
    let task = store.add(draft("a")).unwrap();

    clock.set(T0 + 1_000);
    let done = store.toggle_completion(&task.id).unwrap();
    assert!(done.is_completed);
    assert_eq!(done.completed_at, Some(T0 + 1_000));
    assert_completion_invariant(&store.snapshot());

    clock.set(T0 + 2_000);
    let reopened = store.toggle_completion(&task.id).unwrap();
    assert!(!reopened.is_completed);
    assert_eq!(reopened.completed_at, None);
    assert_eq!(reopened, task);
    assert_completion_invariant(&store.snapshot());
}

#[test]
fn toggle_missing_id_is_not_found() {
    let (mut store, _) = store();
    let err = store.toggle_completion("nope").unwrap_err();
    assert_eq!(err, RepoError::NotFound("nope".to_string()));
}

#[test]
fn snapshots_are_immutable_after_later_mutations() {
    let (mut store, _) = store();
    let a = store.add(draft("a")).unwrap();
    let before = store.snapshot();

    store.toggle_completion(&a.id).unwrap();
    store.add(draft("b")).unwrap();

    assert_eq!(before.len(), 1);
    assert!(!before.get(&a.id).unwrap().is_completed);
    assert_eq!(store.snapshot().len(), 2);
}

#[test]
fn observers_receive_snapshots_in_mutation_order() {
    let (mut store, _) = store();
    let seen: Arc<Mutex<Vec<(u64, usize)>>> = Arc::default();
    let sink = Arc::clone(&seen);
    store.subscribe(move |snapshot| {
        sink.lock()
            .unwrap()
            .push((snapshot.version(), snapshot.len()));
    });

    let a = store.add(draft("a")).unwrap();
    store.add(draft("b")).unwrap();
    store.toggle_completion(&a.id).unwrap();
    store.delete(&a.id);
    store.delete(&a.id);
    let _ = store.add(draft(""));

    assert_eq!(*seen.lock().unwrap(), [(1, 1), (2, 2), (3, 2), (4, 1)]);
}

#[test]
fn unsubscribed_observers_stop_receiving() {
    let (mut store, _) = store();
    let calls = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&calls);
    let id = store.subscribe(move |_| *counter.lock().unwrap() += 1);

    store.add(draft("a")).unwrap();
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.add(draft("b")).unwrap();

    assert_eq!(*calls.lock().unwrap(), 1);
}

#[test]
fn with_tasks_seeds_without_publishing_and_rejects_duplicates() {
    let clock = ManualClock::new(T0);
    let seeds = devkaki_core::sample_tasks(T0);
    let store = TaskStore::with_tasks(clock.clone(), seeds.clone()).unwrap();
    assert_eq!(store.snapshot().tasks(), seeds.as_slice());
    assert_eq!(store.snapshot().version(), 0);

    let duplicated = vec![seeds[0].clone(), seeds[0].clone()];
    let err = TaskStore::with_tasks(clock, duplicated).err().unwrap();
    assert_eq!(err, RepoError::DuplicateId(seeds[0].id.clone()));
}

#[test]
fn in_memory_store_stamps_from_system_clock() {
    let mut store = TaskStore::in_memory();
    let before = chrono::Utc::now().timestamp_millis();
    let task = store.add(draft("a")).unwrap();
    assert!(task.created_at >= before);
}

#[test]
fn every_mutation_keeps_completion_consistent() {
    let (mut store, clock) = store();
    let a = store.add(draft("a")).unwrap();
    assert_completion_invariant(&store.snapshot());

    let b = store.add(draft("b")).unwrap();
    clock.advance_ms(1_000);
    store.toggle_completion(&b.id).unwrap();
    assert_completion_invariant(&store.snapshot());

    let mut renamed = store.get_by_id(&b.id).unwrap().clone();
    renamed.name = "b2".to_string();
    store.update(renamed).unwrap();
    assert_completion_invariant(&store.snapshot());

    store.toggle_completion(&a.id).unwrap();
    assert!(store.delete(&b.id));
    assert_completion_invariant(&store.snapshot());

    store.toggle_completion(&a.id).unwrap();
    assert_completion_invariant(&store.snapshot());
    assert_eq!(store.snapshot().version(), 7);
}

