//! Task store: the single writer over the task collection.
//!
//! # Responsibility
//! - Serialize every mutation through one `&mut self` entry point.
//! - Assign ids and timestamps from the injected clock.
//! - Publish an immutable snapshot to observers after each successful write.
//!
//! # Invariants
//! - Observers see snapshots in mutation order, each exactly once.
//! - Rejected writes and no-op deletes publish nothing.
//! - `created_at` of a stored task is never overwritten by `update`.

use crate::clock::{Clock, SystemClock};
use crate::model::task::{new_task_id, Task};
use crate::repo::task_repo::{InMemoryTaskRepository, RepoError, RepoResult, TaskRepository};
use log::{info, warn};
use std::ops::Deref;
use std::sync::Arc;

/// Immutable, fully materialized view of the collection.
///
/// Cloning is cheap; all clones share one allocation.
#[derive(Debug, Clone)]
pub struct TaskSnapshot {
    version: u64,
    tasks: Arc<[Task]>,
}

impl TaskSnapshot {
    fn capture(version: u64, tasks: &[Task]) -> Self {
        Self {
            version,
            tasks: Arc::from(tasks),
        }
    }

    /// Number of successful mutations applied before this snapshot.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Task with `id` as of this snapshot.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }
}

impl Deref for TaskSnapshot {
    type Target = [Task];

    fn deref(&self) -> &Self::Target {
        &self.tasks
    }
}

/// Handle returned by `TaskStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&TaskSnapshot) + Send>;

/// Owner of the canonical task collection.
pub struct TaskStore<R: TaskRepository, C: Clock> {
    repo: R,
    clock: C,
    snapshot: TaskSnapshot,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl TaskStore<InMemoryTaskRepository, SystemClock> {
    /// Empty in-memory store on the system clock.
    pub fn in_memory() -> Self {
        Self::new(InMemoryTaskRepository::new(), SystemClock)
    }
}

impl<C: Clock> TaskStore<InMemoryTaskRepository, C> {
    /// In-memory store seeded with existing tasks.
    ///
    /// Seeded tasks keep their ids and timestamps. Nothing is published.
    ///
    /// # Errors
    /// - `Validation` for an invalid seed task.
    /// - `DuplicateId` when two seeds share an id.
    pub fn with_tasks(clock: C, tasks: impl IntoIterator<Item = Task>) -> RepoResult<Self> {
        let mut repo = InMemoryTaskRepository::new();
        for task in tasks {
            repo.insert(task)?;
        }
        Ok(Self::new(repo, clock))
    }
}

impl<R: TaskRepository, C: Clock> TaskStore<R, C> {
    /// Creates a store over `repo`, taking whatever it already holds as the
    /// initial snapshot.
    pub fn new(repo: R, clock: C) -> Self {
        let snapshot = TaskSnapshot::capture(0, repo.list());
        Self {
            repo,
            clock,
            snapshot,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Inserts a new task at the end of the collection.
    ///
    /// An empty `id` is replaced by a fresh one; `created_at` is always set
    /// from the clock. Returns the stored value.
    pub fn add(&mut self, mut task: Task) -> RepoResult<Task> {
        if task.id.is_empty() {
            task.id = new_task_id();
        }
        task.created_at = self.clock.now_ms();

        if let Err(err) = self.repo.insert(task.clone()) {
            log_rejected("task_add", &err);
            return Err(err);
        }
        info!("event=task_add module=store status=ok task_id={}", task.id);
        self.publish();
        Ok(task)
    }

    /// Replaces the task with the same id, keeping its position and
    /// `created_at`.
    ///
    /// # Errors
    /// - `NotFound` when no task has `task.id`.
    /// - `Validation` when the replacement is invalid.
    pub fn update(&mut self, mut task: Task) -> RepoResult<Task> {
        let Some(created_at) = self.repo.get(&task.id).map(|stored| stored.created_at) else {
            let err = RepoError::NotFound(task.id);
            log_rejected("task_update", &err);
            return Err(err);
        };
        task.created_at = created_at;

        if let Err(err) = self.repo.replace(task.clone()) {
            log_rejected("task_update", &err);
            return Err(err);
        }
        info!("event=task_update module=store status=ok task_id={}", task.id);
        self.publish();
        Ok(task)
    }

    /// Removes a task permanently. Returns whether anything was removed;
    /// an unknown id is a silent no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        if self.repo.remove(id).is_none() {
            info!("event=task_delete module=store status=noop task_id={id}");
            return false;
        }
        info!("event=task_delete module=store status=ok task_id={id}");
        self.publish();
        true
    }

    /// Flips completion, stamping or clearing `completed_at`.
    ///
    /// # Errors
    /// - `NotFound` when no task has `id`.
    pub fn toggle_completion(&mut self, id: &str) -> RepoResult<Task> {
        let Some(current) = self.repo.get(id) else {
            let err = RepoError::NotFound(id.to_string());
            log_rejected("task_toggle", &err);
            return Err(err);
        };
        let toggled = current.toggled(self.clock.now_ms());

        if let Err(err) = self.repo.replace(toggled.clone()) {
            log_rejected("task_toggle", &err);
            return Err(err);
        }
        info!(
            "event=task_toggle module=store status=ok task_id={} completed={}",
            toggled.id, toggled.is_completed
        );
        self.publish();
        Ok(toggled)
    }

    /// Current value of the task with `id`, if it exists.
    pub fn get_by_id(&self, id: &str) -> Option<&Task> {
        self.repo.get(id)
    }

    /// Current snapshot. Later mutations never alter a returned value.
    pub fn snapshot(&self) -> TaskSnapshot {
        self.snapshot.clone()
    }

    /// Registers an observer called synchronously after every successful
    /// mutation.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&TaskSnapshot) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drops an observer. Returns `false` for an unknown handle.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn publish(&mut self) {
        self.snapshot = TaskSnapshot::capture(self.snapshot.version + 1, self.repo.list());
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.snapshot);
        }
    }
}

fn log_rejected(event: &str, err: &RepoError) {
    let (reason, task_id) = match err {
        RepoError::Validation(_) => ("validation", None),
        RepoError::DuplicateId(id) => ("duplicate_id", Some(id.as_str())),
        RepoError::NotFound(id) => ("not_found", Some(id.as_str())),
    };
    warn!(
        "event={event} module=store status=error reason={reason} task_id={}",
        task_id.unwrap_or("-")
    );
}
