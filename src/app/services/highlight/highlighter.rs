use std::collections::HashSet;
use std::ops::Range;

use super::keywords::{Category, KeywordSet, Vocabulary};

/// Style character for text outside any mark.
pub const PLAIN_STYLE: char = 'A';

/// A highlighted span: half-open byte range into the buffer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mark {
    pub category: Category,
    pub start: usize,
    pub end: usize,
}

impl Mark {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Marks in the order they were applied. Identical marks are kept once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkSet {
    marks: Vec<Mark>,
    seen: HashSet<Mark>,
}

impl MarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the mark was already present.
    pub fn insert(&mut self, mark: Mark) -> bool {
        if !self.seen.insert(mark) {
            return false;
        }
        self.marks.push(mark);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter()
    }

    pub fn of(&self, category: Category) -> impl Iterator<Item = &Mark> {
        self.marks.iter().filter(move |m| m.category == category)
    }

    pub fn count(&self, category: Category) -> usize {
        self.of(category).count()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

/// Recompute every mark for `text`.
///
/// The text is split on whitespace; each token found in a keyword set is then
/// searched for across the whole buffer as a literal substring, so a keyword
/// also matches inside longer identifiers. Tokens are not deduplicated.
pub fn highlight(text: &str, vocab: &Vocabulary) -> MarkSet {
    let mut marks = MarkSet::new();

    for word in text.split_whitespace() {
        for set in vocab.sets() {
            if set.contains(word) {
                mark_occurrences(text, word, set, &mut marks);
            }
        }
    }

    marks
}

fn mark_occurrences(text: &str, word: &str, set: &KeywordSet, marks: &mut MarkSet) {
    let mut pos = 0;
    while let Some(found) = text[pos..].find(word) {
        let start = pos + found;
        let end = start + word.len();
        marks.insert(Mark { category: set.category(), start, end });
        pos = end;
    }
}

/// Build an FLTK style string (one char per byte) from a mark set.
/// Categories are painted in priority order, so a shader-state mark always
/// wins over an overlapping shading mark regardless of which came first.
pub fn style_string(text_len: usize, marks: &MarkSet) -> String {
    let mut styles = vec![PLAIN_STYLE as u8; text_len];
    for &category in Category::all() {
        for mark in marks.of(category) {
            let end = mark.end.min(text_len);
            if mark.start >= end {
                continue;
            }
            styles[mark.start..end].fill(category.style_char() as u8);
        }
    }
    // Style chars are all ASCII.
    styles.into_iter().map(char::from).collect()
}

/// Style string with no highlighting at all.
pub fn plain_style(text_len: usize) -> String {
    PLAIN_STYLE.to_string().repeat(text_len)
}
