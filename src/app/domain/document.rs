use std::cell::Cell;
use std::rc::Rc;

use fltk::app::Sender;
use fltk::text::TextBuffer;

use super::messages::Message;
use crate::app::infrastructure::buffer::buffer_text_no_leak;
use crate::app::services::highlight::{PLAIN_STYLE, plain_style};
use crate::app::services::text_ops::extract_filename;

const UNTITLED: &str = "Untitled";

/// Keep the style buffer byte-aligned with `buffer` until the next highlight
/// pass repaints it, flag the document dirty, then run `on_change`.
fn attach_style_sync(
    buffer: &mut TextBuffer,
    style_buffer: &TextBuffer,
    has_unsaved_changes: &Rc<Cell<bool>>,
    mut on_change: impl FnMut() + 'static,
) {
    let changes = has_unsaved_changes.clone();
    let mut style_buf = style_buffer.clone();
    buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
        if inserted > 0 || deleted > 0 {
            changes.set(true);
            // Remove first: a replace reports both counts at the same position.
            if deleted > 0 {
                style_buf.remove(pos, pos + deleted);
            }
            if inserted > 0 {
                let filler = PLAIN_STYLE.to_string().repeat(inserted as usize);
                style_buf.insert(pos, &filler);
            }
            on_change();
        }
    });
}

/// The single edited document: text buffer, parallel style buffer, and the
/// file it was loaded from or saved to.
pub struct Document {
    pub buffer: TextBuffer,
    pub style_buffer: TextBuffer,
    pub file_path: Option<String>,
    pub has_unsaved_changes: Rc<Cell<bool>>,
    pub display_name: String,
}

impl Document {
    pub fn new(sender: Sender<Message>) -> Self {
        let mut buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();
        let has_unsaved_changes = Rc::new(Cell::new(false));

        attach_style_sync(&mut buffer, &style_buffer, &has_unsaved_changes, move || {
            sender.send(Message::BufferModified);
        });

        Self {
            buffer,
            style_buffer,
            file_path: None,
            has_unsaved_changes,
            display_name: UNTITLED.to_string(),
        }
    }

    pub fn text(&self) -> String {
        buffer_text_no_leak(&self.buffer)
    }

    /// Replace the whole buffer with file content and adopt the path.
    pub fn load(&mut self, path: String, content: &str) {
        self.buffer.set_text(content);
        self.style_buffer.set_text(&plain_style(content.len()));
        self.set_path(path);
        self.mark_clean();
    }

    /// Empty the buffer and forget the file.
    pub fn reset(&mut self) {
        self.buffer.set_text("");
        self.style_buffer.set_text("");
        self.file_path = None;
        self.display_name = UNTITLED.to_string();
        self.mark_clean();
    }

    pub fn set_path(&mut self, path: String) {
        self.display_name = extract_filename(&path);
        self.file_path = Some(path);
    }

    pub fn is_dirty(&self) -> bool {
        self.has_unsaved_changes.get()
    }

    pub fn mark_clean(&self) {
        self.has_unsaved_changes.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synced_buffers() -> (TextBuffer, TextBuffer, Rc<Cell<bool>>, Rc<Cell<u32>>) {
        let mut buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();
        let dirty = Rc::new(Cell::new(false));
        let edits = Rc::new(Cell::new(0));
        let counter = edits.clone();
        attach_style_sync(&mut buffer, &style_buffer, &dirty, move || {
            counter.set(counter.get() + 1);
        });
        (buffer, style_buffer, dirty, edits)
    }

    #[test]
    fn test_style_buffer_follows_replacement_with_shorter_text() {
        let (mut buffer, style_buffer, dirty, edits) = synced_buffers();

        buffer.set_text("$begin\nuniform vec3 color;\n$end\n");
        assert_eq!(style_buffer.length(), buffer.length());

        buffer.set_text("$end");
        assert_eq!(buffer.length(), 4);
        assert_eq!(style_buffer.length(), buffer.length());
        assert_eq!(buffer_text_no_leak(&style_buffer), "AAAA");

        assert!(dirty.get());
        assert_eq!(edits.get(), 2);
    }

    #[test]
    fn test_style_buffer_follows_insert_and_remove() {
        let (mut buffer, style_buffer, _dirty, _edits) = synced_buffers();

        buffer.set_text("vec3 p;");
        buffer.insert(0, "in ");
        assert_eq!(style_buffer.length(), buffer.length());

        buffer.remove(0, 5);
        assert_eq!(buffer_text_no_leak(&buffer), "c3 p;");
        assert_eq!(style_buffer.length(), buffer.length());

        buffer.set_text("");
        assert_eq!(style_buffer.length(), 0);
    }
}
