// store/mod.rs — In-memory task collection.
//
// The store owns the task list and the id sequence. Handlers reach it
// through `AppContext` behind an `RwLock`, so there is one logical writer
// at a time and listing order stays stable.

use serde::{Deserialize, Serialize};

/// Minimum task name length, counted in Unicode scalar values.
const MIN_NAME_LEN: usize = 3;

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique, assigned sequentially from 1, never reused after deletion.
    pub id: u64,
    /// Always at least `MIN_NAME_LEN` characters while stored.
    pub name: String,
    pub completed: bool,
}

/// Store failures. The `Display` texts are the wire contract: they are
/// sent verbatim as the HTTP error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("The task with the provided ID does not exist.")]
    NotFound,
    #[error("The name should be at least 3 chars long!")]
    InvalidName,
}

/// Ordered in-memory task collection with a monotonic id sequence.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    /// Next id to assign. Counter, not max+1 — deleting the highest task
    /// must not cause its id to be handed out again.
    next_id: u64,
}

impl TaskStore {
    /// An empty store; ids start at 1.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// The store as it looks at process startup: three seed tasks.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for name in ["Task 1", "Task 2", "Task 3"] {
            let _ = store.create(Some(name.to_string()), None);
        }
        store
    }

    /// All tasks in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Result<&Task, StoreError> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)
    }

    /// Create a task. `name` must be present and valid; `completed`
    /// defaults to `false`.
    pub fn create(
        &mut self,
        name: Option<String>,
        completed: Option<bool>,
    ) -> Result<Task, StoreError> {
        let name = valid_name(name)?;
        let task = Task {
            id: self.next_id,
            name,
            completed: completed.unwrap_or(false),
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Full update: overwrite `name` and `completed`.
    ///
    /// Unknown id wins over a bad name — `NotFound` is checked first.
    pub fn replace(
        &mut self,
        id: u64,
        name: Option<String>,
        completed: bool,
    ) -> Result<Task, StoreError> {
        let task = self.get_mut(id)?;
        let name = valid_name(name)?;
        task.name = name;
        task.completed = completed;
        Ok(task.clone())
    }

    /// Partial update: only the provided fields change; absent fields keep
    /// their prior value. A bad name fails the whole request before any
    /// field is written.
    pub fn patch(
        &mut self,
        id: u64,
        name: Option<String>,
        completed: Option<bool>,
    ) -> Result<Task, StoreError> {
        let task = self.get_mut(id)?;
        if let Some(name) = name {
            task.name = valid_name(Some(name))?;
        }
        if let Some(completed) = completed {
            task.completed = completed;
        }
        Ok(task.clone())
    }

    /// Remove a task and return it.
    pub fn remove(&mut self, id: u64) -> Result<Task, StoreError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        Ok(self.tasks.remove(idx))
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Missing and too-short names fail the same way — the original API made
/// no distinction between the two.
fn valid_name(name: Option<String>) -> Result<String, StoreError> {
    name.filter(|n| n.chars().count() >= MIN_NAME_LEN)
        .ok_or(StoreError::InvalidName)
}
