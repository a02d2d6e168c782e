use std::sync::OnceLock;

use pulldown_cmark::{html, Event, Options, Parser};
use regex::Regex;

use crate::catalog::Note;
use crate::filter::{highlight, Segment};
use crate::selection::SelectionState;

pub const EXPANDED_INDICATOR: &str = "▲";
pub const COLLAPSED_INDICATOR: &str = "▼";
pub const COLLAPSE_LABEL: &str = "收起";
pub const EXPAND_LABEL: &str = "展開";
pub const NO_RESULTS_ICON: &str = "🔍";
pub const NO_RESULTS_TEXT: &str = "沒有找到相關筆記";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub stagger_ms: u32,
    pub highlight_matches: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            stagger_ms: 100,
            highlight_matches: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteCard {
    pub id: &'static str,
    pub title: &'static str,
    pub title_segments: Vec<Segment>,
    pub expanded: bool,
    pub content: &'static str,
    pub content_html: String,
    pub tags: &'static [&'static str],
    pub entrance_delay_ms: u32,
}

pub fn indicator(expanded: bool) -> &'static str {
    if expanded {
        EXPANDED_INDICATOR
    } else {
        COLLAPSED_INDICATOR
    }
}

pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded {
        COLLAPSE_LABEL
    } else {
        EXPAND_LABEL
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayUnit {
    Note(NoteCard),
    NoResults,
}

impl DisplayUnit {
    pub fn note_id(&self) -> Option<&'static str> {
        match self {
            DisplayUnit::Note(card) => Some(card.id),
            DisplayUnit::NoResults => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tab {
    pub id: &'static str,
    pub name: &'static str,
    pub shortcut: usize,
    pub active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewModel {
    pub tabs: Vec<Tab>,
    pub units: Vec<DisplayUnit>,
    pub search_placeholder: String,
    pub revision: u64,
}

impl ViewModel {
    /// Render key of the unit at `index`. The revision is part of the key so
    /// a recomputed list mounts fresh cards while a toggle reuses them.
    pub fn unit_key(&self, index: usize) -> (u64, &'static str) {
        let id = self
            .units
            .get(index)
            .and_then(DisplayUnit::note_id)
            .unwrap_or_default();
        (self.revision, id)
    }

    pub fn card(&self, note_id: &str) -> Option<&NoteCard> {
        self.units.iter().find_map(|unit| match unit {
            DisplayUnit::Note(card) if card.id == note_id => Some(card),
            _ => None,
        })
    }

    pub fn is_expanded(&self, note_id: &str) -> bool {
        self.card(note_id).is_some_and(|card| card.expanded)
    }
}

pub fn search_placeholder(category_name: &str) -> String {
    format!("搜尋 {category_name} 筆記...")
}

fn is_list_line(line: &str) -> bool {
    static RE_LIST: OnceLock<Regex> = OnceLock::new();
    let re_list = RE_LIST.get_or_init(|| Regex::new(r"^\s*(?:[-*+]|\d+[.)])\s").unwrap());
    re_list.is_match(line)
}

/// A plain line right after a list item would be folded into that item as
/// a lazy continuation; a blank line in between closes the list instead.
fn close_lists(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut after_item = false;
    for (idx, line) in content.split('\n').enumerate() {
        let list_line = is_list_line(line);
        if idx > 0 {
            out.push('\n');
            let plain = !line.is_empty() && !line.starts_with(char::is_whitespace);
            if after_item && !list_line && plain {
                out.push('\n');
            }
        }
        out.push_str(line);
        after_item = list_line;
    }
    out
}

/// Markdown body of a note. Single newlines in the source are line breaks,
/// not paragraph joins.
pub fn content_to_html(content: &str) -> String {
    let source = close_lists(content);
    let parser = Parser::new_ext(&source, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn note_card(note: &'static Note, index: usize, state: &SelectionState, options: &RenderOptions) -> NoteCard {
    let title_segments = if options.highlight_matches {
        highlight(note.title, state.search_term())
    } else {
        highlight(note.title, "")
    };
    NoteCard {
        id: note.id,
        title: note.title,
        title_segments,
        expanded: state.is_expanded(note.id),
        content: note.content,
        content_html: content_to_html(note.content),
        tags: note.tags,
        entrance_delay_ms: options.stagger_ms.saturating_mul(index as u32),
    }
}

pub fn project(state: &SelectionState, options: &RenderOptions) -> ViewModel {
    let current = state.category();
    let tabs = state
        .catalog()
        .iter()
        .enumerate()
        .map(|(idx, category)| Tab {
            id: category.id,
            name: category.name,
            shortcut: idx + 1,
            active: category.id == current.id,
        })
        .collect();

    let units = if state.filtered().is_empty() {
        vec![DisplayUnit::NoResults]
    } else {
        state
            .filtered()
            .iter()
            .enumerate()
            .map(|(idx, note)| DisplayUnit::Note(note_card(note, idx, state, options)))
            .collect()
    };

    ViewModel {
        tabs,
        units,
        search_placeholder: search_placeholder(current.name),
        revision: state.revision(),
    }
}
