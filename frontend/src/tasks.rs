//! Task list - every upload tracked by one widget.
//!
//! Tasks are kept in selection order. Status updates are only accepted
//! when they move a task forward in its lifecycle, so a task can never
//! leave a terminal state or reach a second one.

use std::fmt;

use crate::types::{StatusUpdate, TaskId, UploadStatus, UploadTask};

/// Why a status update was not applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejected {
    /// No task with this id (never created, or discarded by a reset).
    UnknownTask(TaskId),
    /// The update does not move the task forward.
    NotForward {
        id: TaskId,
        from: UploadStatus,
        to: UploadStatus,
    },
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejected::UnknownTask(id) => write!(f, "unknown task {}", id),
            Rejected::NotForward { id, from, to } => {
                write!(f, "task {} cannot go from {} to {}", id, from, to)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<UploadTask>,
    next_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a newly selected file.
    pub fn add(&mut self, name: impl Into<String>, size: u64) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(UploadTask::new(id, name, size));
        id
    }

    /// Apply a status update, returning the updated task.
    pub fn apply(&mut self, update: &StatusUpdate) -> Result<UploadTask, Rejected> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == update.id)
            .ok_or(Rejected::UnknownTask(update.id))?;

        if update.status.rank() <= task.status.rank() {
            return Err(Rejected::NotForward {
                id: task.id,
                from: task.status,
                to: update.status,
            });
        }

        task.status = update.status;
        if update.status == UploadStatus::Error {
            task.error = update.error.clone();
        }
        Ok(task.clone())
    }

    pub fn get(&self, id: TaskId) -> Option<&UploadTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Copy of the whole list, in selection order.
    pub fn snapshot(&self) -> Vec<UploadTask> {
        self.tasks.clone()
    }

    /// Drop every task. Ids keep increasing so late updates for
    /// dropped tasks stay unknown.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
