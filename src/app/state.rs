use fltk::{
    app::Sender,
    dialog,
    menu::MenuBar,
    prelude::*,
    text::{TextEditor, WrapMode},
    window::Window,
};

use super::controllers::highlight::HighlightController;
use super::domain::{AppSettings, Document, Message, ThemeMode};
use super::services::file_io::{parent_directory, read_document, write_document};
use super::services::highlight::Category;
use super::services::text_ops::{linenumber_width, window_title};
use crate::ui::dialogs::documentation::show_documentation_dialog;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::theme::{apply_theme, font_for};

/// The editor session: one document, its widgets, and the user's preferences.
pub struct AppState {
    pub document: Document,
    pub editor: TextEditor,
    pub window: Window,
    pub menu: MenuBar,
    pub settings: AppSettings,
    pub highlight: HighlightController,
    /// Last directory used in a file open/save dialog.
    pub last_open_directory: Option<String>,
}

impl AppState {
    pub fn new(
        editor: TextEditor,
        window: Window,
        menu: MenuBar,
        sender: Sender<Message>,
        settings: AppSettings,
    ) -> Self {
        let document = Document::new(sender);
        let highlight = HighlightController::new(
            settings.theme_mode == ThemeMode::Dark,
            font_for(settings.font),
            settings.font_size as i32,
            settings.highlighting_enabled,
        );

        Self {
            document,
            editor,
            window,
            menu,
            settings,
            highlight,
            last_open_directory: None,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.settings.theme_mode == ThemeMode::Dark
    }

    /// Attach the document buffers to the editor and apply all view settings.
    pub fn bind_document(&mut self) {
        self.editor.set_buffer(self.document.buffer.clone());
        self.highlight.bind(&self.document, &mut self.editor);
        self.apply_view_settings();
        self.update_window_title();
    }

    fn apply_view_settings(&mut self) {
        let is_dark = self.is_dark();
        apply_theme(&mut self.editor, &mut self.window, &mut self.menu, is_dark);

        self.editor.set_text_font(font_for(self.settings.font));
        self.editor.set_text_size(self.settings.font_size as i32);

        let wrap = if self.settings.word_wrap_enabled { WrapMode::AtBounds } else { WrapMode::None };
        self.editor.wrap_mode(wrap, 0);

        self.update_linenumber_width();
        self.editor.redraw();
    }

    pub fn update_window_title(&mut self) {
        let title = window_title(&self.document.display_name, self.document.is_dirty());
        self.window.set_label(&title);
    }

    fn update_linenumber_width(&mut self) {
        if !self.settings.line_numbers_enabled {
            self.editor.set_linenumber_width(0);
            return;
        }
        let buf = &self.document.buffer;
        let line_count = buf.count_lines(0, buf.length()) as usize;
        self.editor.set_linenumber_width(linenumber_width(line_count));
    }

    fn save_settings(&self) {
        if let Err(e) = self.settings.save() {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    pub fn rehighlight(&mut self) {
        self.highlight.rehighlight(&mut self.document, &mut self.editor);
    }

    /// Called for every insert/delete in the document buffer.
    pub fn buffer_modified(&mut self) {
        self.rehighlight();
        self.update_linenumber_width();
        self.update_window_title();
    }

    // --- File operations ---

    /// Load `path` into the buffer. On failure the buffer is left as it was.
    pub fn open_file(&mut self, path: String) {
        if let Some(dir) = parent_directory(&path) {
            self.last_open_directory = Some(dir);
        }
        match read_document(&path) {
            Ok(content) => {
                self.document.load(path, &content);
                self.rehighlight();
                self.editor.set_insert_position(0);
                self.editor.show_insert_position();
                self.update_linenumber_width();
                self.update_window_title();
            }
            Err(e) => {
                log::warn!("{}", e);
                dialog::alert_default(&format!("Error opening file: {}", e));
            }
        }
    }

    pub fn file_new(&mut self) {
        self.document.reset();
        self.rehighlight();
        self.update_linenumber_width();
        self.update_window_title();
    }

    pub fn file_open(&mut self) {
        if let Some(path) = native_open_dialog(self.last_open_directory.as_deref()) {
            self.open_file(path);
        }
    }

    /// Save to the current path, or ask for one. Returns true once the
    /// buffer is on disk.
    pub fn file_save(&mut self) -> bool {
        let Some(path) = self.document.file_path.clone() else {
            return self.file_save_as();
        };

        match write_document(&path, &self.document.text()) {
            Ok(()) => {
                self.document.mark_clean();
                self.update_window_title();
                true
            }
            Err(e) => {
                log::warn!("{}", e);
                dialog::alert_default(&format!("Error saving file: {}", e));
                false
            }
        }
    }

    pub fn file_save_as(&mut self) -> bool {
        let Some(path) = native_save_dialog(self.last_open_directory.as_deref()) else {
            return false;
        };
        if let Some(dir) = parent_directory(&path) {
            self.last_open_directory = Some(dir);
        }

        match write_document(&path, &self.document.text()) {
            Ok(()) => {
                self.document.set_path(path);
                self.document.mark_clean();
                self.update_window_title();
                true
            }
            Err(e) => {
                log::warn!("{}", e);
                dialog::alert_default(&format!("Error saving file: {}", e));
                false
            }
        }
    }

    /// Handle quit request. Returns `true` if the app should exit.
    pub fn file_quit(&mut self) -> bool {
        if !self.document.is_dirty() {
            return true;
        }

        let choice = dialog::choice2_default(
            "You have unsaved changes.",
            "Save",
            "Quit Without Saving",
            "Cancel",
        );

        match choice {
            Some(0) => self.file_save(),
            Some(1) => true,
            _ => false,
        }
    }

    // --- View toggles ---

    pub fn toggle_line_numbers(&mut self) {
        self.settings.line_numbers_enabled = !self.settings.line_numbers_enabled;
        self.update_linenumber_width();
        self.editor.redraw();
        self.save_settings();
    }

    pub fn toggle_word_wrap(&mut self) {
        self.settings.word_wrap_enabled = !self.settings.word_wrap_enabled;
        let wrap = if self.settings.word_wrap_enabled { WrapMode::AtBounds } else { WrapMode::None };
        self.editor.wrap_mode(wrap, 0);
        self.editor.redraw();
        self.save_settings();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.settings.theme_mode = match self.settings.theme_mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        let is_dark = self.is_dark();
        apply_theme(&mut self.editor, &mut self.window, &mut self.menu, is_dark);
        self.highlight.set_dark_mode(is_dark);
        self.highlight.bind(&self.document, &mut self.editor);
        self.editor.redraw();
        self.save_settings();
    }

    pub fn toggle_highlighting(&mut self) {
        self.highlight.highlighting_enabled = !self.highlight.highlighting_enabled;
        self.settings.highlighting_enabled = self.highlight.highlighting_enabled;
        self.rehighlight();
        self.save_settings();
    }

    pub fn show_documentation(&self, category: Category) {
        let set = self.highlight.vocabulary().set_for(category);
        show_documentation_dialog(set, self.is_dark());
    }

    /// Dispatch one message. Returns `true` when the application should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::FileNew => self.file_new(),
            Message::FileOpen => self.file_open(),
            Message::FileSave => {
                self.file_save();
            }
            Message::FileSaveAs => {
                self.file_save_as();
            }
            Message::FileQuit | Message::WindowClose => return self.file_quit(),
            Message::ToggleLineNumbers => self.toggle_line_numbers(),
            Message::ToggleWordWrap => self.toggle_word_wrap(),
            Message::ToggleDarkMode => self.toggle_dark_mode(),
            Message::ToggleHighlighting => self.toggle_highlighting(),
            Message::ShowDocumentation(category) => self.show_documentation(category),
            Message::BufferModified => self.buffer_modified(),
        }
        false
    }
}
