use fltk::{
    enums::{Color, Font},
    prelude::*,
    text::{StyleTableEntry, TextEditor},
};

use crate::app::domain::Document;
use crate::app::services::highlight::{
    Category, MarkSet, Vocabulary, highlight, plain_style, style_string,
};
use crate::ui::theme::category_color;

/// Owns the keyword vocabulary and the style table, and repaints a
/// document's style buffer after every edit.
pub struct HighlightController {
    vocabulary: Vocabulary,
    entries: Vec<StyleTableEntry>,
    is_dark: bool,
    font: Font,
    font_size: i32,
    pub highlighting_enabled: bool,
}

impl HighlightController {
    pub fn new(is_dark: bool, font: Font, font_size: i32, highlighting_enabled: bool) -> Self {
        let mut controller = Self {
            vocabulary: Vocabulary::default(),
            entries: Vec::new(),
            is_dark,
            font,
            font_size,
            highlighting_enabled,
        };
        controller.rebuild_style_table();
        controller
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Style table for FLTK's set_highlight_data: 'A' plain, then one entry
    /// per category in style-char order.
    pub fn style_table(&self) -> Vec<StyleTableEntry> {
        self.entries.clone()
    }

    fn rebuild_style_table(&mut self) {
        let mut entries = vec![StyleTableEntry {
            color: Color::Foreground,
            font: self.font,
            size: self.font_size,
        }];
        for &category in Category::all() {
            entries.push(StyleTableEntry {
                color: category_color(category, self.is_dark),
                font: self.font,
                size: self.font_size,
            });
        }
        self.entries = entries;
    }

    pub fn set_dark_mode(&mut self, is_dark: bool) {
        self.is_dark = is_dark;
        self.rebuild_style_table();
    }

    /// Attach the document's style buffer and the current table to the editor.
    pub fn bind(&self, doc: &Document, editor: &mut TextEditor) {
        editor.set_highlight_data(doc.style_buffer.clone(), self.style_table());
    }

    /// Recompute all marks from scratch and repaint the style buffer.
    pub fn rehighlight(&self, doc: &mut Document, editor: &mut TextEditor) -> MarkSet {
        let text = doc.text();
        let (marks, styles) = if self.highlighting_enabled {
            let marks = highlight(&text, &self.vocabulary);
            let styles = style_string(text.len(), &marks);
            (marks, styles)
        } else {
            (MarkSet::new(), plain_style(text.len()))
        };

        log::debug!(
            "Highlighted {} bytes: {} {} marks, {} {} marks",
            text.len(),
            marks.count(Category::Shading),
            Category::Shading.label(),
            marks.count(Category::ShaderState),
            Category::ShaderState.label(),
        );

        doc.style_buffer.set_text(&styles);
        editor.redraw();
        marks
    }
}
