use std::collections::HashSet;

use crate::catalog::{find_category, Category, Note};
use crate::filter::filter_notes;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub category_changed: bool,
    pub list_changed: bool,
    pub expansion_changed: bool,
    pub revision: u64,
}

impl ApplyOutcome {
    pub fn changed(self) -> bool {
        self.category_changed || self.list_changed || self.expansion_changed
    }
}

/// Which category is shown, what it is filtered by, and which cards are open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    catalog: &'static [Category],
    category: &'static Category,
    search_term: String,
    filtered: Vec<&'static Note>,
    expanded: HashSet<&'static str>,
    revision: u64,
}

impl SelectionState {
    /// Starts on `initial` when it names a category, else on the first one.
    /// Returns `None` only for an empty catalog.
    pub fn new(catalog: &'static [Category], initial: Option<&str>) -> Option<Self> {
        let category = initial
            .and_then(|id| find_category(catalog, id))
            .or_else(|| catalog.first())?;
        Some(Self {
            catalog,
            category,
            search_term: String::new(),
            filtered: filter_notes(category.notes, ""),
            expanded: HashSet::new(),
            revision: 0,
        })
    }

    pub fn catalog(&self) -> &'static [Category] {
        self.catalog
    }

    pub fn category(&self) -> &'static Category {
        self.category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filtered(&self) -> &[&'static Note] {
        &self.filtered
    }

    pub fn is_expanded(&self, note_id: &str) -> bool {
        self.expanded.contains(note_id)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn note_by_id(&self, note_id: &str) -> Option<&'static Note> {
        self.category.note(note_id)
    }

    pub fn select_category(&mut self, id: &str) -> ApplyOutcome {
        if id == self.category.id {
            return self.unchanged();
        }
        let Some(category) = find_category(self.catalog, id) else {
            log::debug!("ignoring unknown category `{id}`");
            return self.unchanged();
        };

        log::info!(
            "switching category `{}` -> `{id}`, collapsing {} notes",
            self.category.id,
            self.expanded_count()
        );
        self.category = category;
        self.expanded.clear();
        self.search_term.clear();
        self.filtered = filter_notes(category.notes, "");
        self.revision += 1;

        ApplyOutcome {
            category_changed: true,
            list_changed: true,
            expansion_changed: false,
            revision: self.revision,
        }
    }

    pub fn select_category_at(&mut self, index: usize) -> ApplyOutcome {
        match self.catalog.get(index) {
            Some(category) => self.select_category(category.id),
            None => {
                log::debug!("ignoring tab index {index}");
                self.unchanged()
            }
        }
    }

    pub fn search(&mut self, term: &str) -> ApplyOutcome {
        let next = filter_notes(self.category.notes, term);
        let list_changed = next != self.filtered;
        self.search_term = term.to_string();
        self.filtered = next;
        self.revision += 1;
        log::debug!(
            "search `{}` in `{}`: {} of {} notes",
            term.trim(),
            self.category.id,
            self.filtered.len(),
            self.category.notes.len()
        );

        ApplyOutcome {
            category_changed: false,
            list_changed,
            expansion_changed: false,
            revision: self.revision,
        }
    }

    pub fn toggle_expand(&mut self, note_id: &str) -> ApplyOutcome {
        let Some(note) = self.note_by_id(note_id) else {
            log::debug!("ignoring toggle of unknown note `{note_id}`");
            return self.unchanged();
        };
        if !self.expanded.remove(note.id) {
            self.expanded.insert(note.id);
        }

        ApplyOutcome {
            category_changed: false,
            list_changed: false,
            expansion_changed: true,
            revision: self.revision,
        }
    }

    fn unchanged(&self) -> ApplyOutcome {
        ApplyOutcome {
            revision: self.revision,
            ..ApplyOutcome::default()
        }
    }
}
