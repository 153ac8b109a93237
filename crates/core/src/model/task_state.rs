use crate::model::ids::TaskId;

/// Checked state of every task, indexed by `TaskId`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskState {
    checked: Vec<bool>,
}

impl TaskState {
    /// All tasks unchecked.
    #[must_use]
    pub fn unchecked(len: usize) -> Self {
        Self {
            checked: vec![false; len],
        }
    }

    #[must_use]
    pub fn from_checked(checked: Vec<bool>) -> Self {
        Self { checked }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Unknown tasks read as unchecked.
    #[must_use]
    pub fn is_checked(&self, task: TaskId) -> bool {
        self.checked.get(task.index()).copied().unwrap_or(false)
    }

    /// Set a task's checked state. Returns `false` if the task does not exist.
    pub fn set(&mut self, task: TaskId, checked: bool) -> bool {
        match self.checked.get_mut(task.index()) {
            Some(slot) => {
                *slot = checked;
                true
            }
            None => false,
        }
    }

    pub fn clear_all(&mut self) {
        self.checked.iter_mut().for_each(|slot| *slot = false);
    }

    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|checked| **checked).count()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.checked
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaskId, bool)> + '_ {
        self.checked
            .iter()
            .enumerate()
            .map(|(idx, checked)| (TaskId::new(idx), *checked))
    }
}
