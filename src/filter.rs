use crate::catalog::Note;

/// Per-char lowercase shared by filtering and highlighting so both agree on
/// what counts as a match.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

pub fn normalize_term(term: &str) -> String {
    fold_case(term.trim())
}

pub fn note_matches(note: &Note, needle: &str) -> bool {
    fold_case(note.title).contains(needle)
        || fold_case(note.content).contains(needle)
        || note.tags.iter().any(|tag| fold_case(tag).contains(needle))
}

/// Notes of one category matching `term` in title, content or any tag,
/// in source order. A blank term keeps every note.
pub fn filter_notes(notes: &'static [Note], term: &str) -> Vec<&'static Note> {
    let needle = normalize_term(term);
    if needle.is_empty() {
        return notes.iter().collect();
    }
    notes.iter().filter(|note| note_matches(note, &needle)).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn new(text: &str, matched: bool) -> Self {
        Self {
            text: text.to_string(),
            matched,
        }
    }
}

pub fn highlight(text: &str, term: &str) -> Vec<Segment> {
    let needle = normalize_term(term);
    if needle.is_empty() || text.is_empty() {
        return vec![Segment::new(text, false)];
    }

    // origin[i] is the offset in `text` of the char that folded into byte i.
    let mut folded = String::new();
    let mut origin = Vec::new();
    for (offset, ch) in text.char_indices() {
        folded.extend(ch.to_lowercase());
        origin.resize(folded.len(), offset);
    }
    let char_end = |offset: usize| offset + text[offset..].chars().next().map_or(0, char::len_utf8);

    let mut segments = Vec::new();
    let mut cursor = 0usize;
    for (start, found) in folded.match_indices(needle.as_str()) {
        let from = origin[start].max(cursor);
        let to = char_end(origin[start + found.len() - 1]);
        if to <= from {
            continue;
        }
        if from > cursor {
            segments.push(Segment::new(&text[cursor..from], false));
        }
        segments.push(Segment::new(&text[from..to], true));
        cursor = to;
    }
    if cursor < text.len() {
        segments.push(Segment::new(&text[cursor..], false));
    }
    segments
}
