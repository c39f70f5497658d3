//! Pill selector over quick tasks.
//!
//! Behaves like a checkbox group: each pill toggles independently and the
//! selection is reported in declaration order.

use crate::i18n::Language;
use crate::model::TaskDescriptor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPill {
    pub id: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskSelector {
    pills: Vec<TaskPill>,
}

impl TaskSelector {
    pub fn new<'a, I>(tasks: I, lang: Language) -> Self
    where
        I: IntoIterator<Item = &'a TaskDescriptor>,
    {
        let pills = tasks
            .into_iter()
            .map(|task| TaskPill {
                id: task.id.clone(),
                label: task.label.get(lang).to_string(),
                selected: false,
            })
            .collect();
        Self { pills }
    }

    pub fn pills(&self) -> &[TaskPill] {
        &self.pills
    }

    pub fn is_empty(&self) -> bool {
        self.pills.is_empty()
    }

    /// Flips the pill. Returns the new state, or `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let pill = self.pills.iter_mut().find(|pill| pill.id == id)?;
        pill.selected = !pill.selected;
        Some(pill.selected)
    }

    /// Marks the pill selected. Returns `false` for an unknown id.
    pub fn select(&mut self, id: &str) -> bool {
        match self.pills.iter_mut().find(|pill| pill.id == id) {
            Some(pill) => {
                pill.selected = true;
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.pills.iter().any(|pill| pill.id == id && pill.selected)
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.pills
            .iter()
            .filter(|pill| pill.selected)
            .map(|pill| pill.id.clone())
            .collect()
    }
}
