use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::{AppSettings, Message, ThemeMode};
use crate::app::services::highlight::Category;

fn toggle_flag(on: bool) -> MenuFlag {
    if on { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle }
}

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, settings: &AppSettings) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Exit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // View
    menu.add("View/Toggle Line Numbers", Shortcut::None, toggle_flag(settings.line_numbers_enabled), { let s = *s; move |_| s.send(Message::ToggleLineNumbers) });
    menu.add("View/Toggle Word Wrap", Shortcut::None, toggle_flag(settings.word_wrap_enabled), { let s = *s; move |_| s.send(Message::ToggleWordWrap) });
    menu.add("View/Toggle Dark Mode", Shortcut::None, toggle_flag(settings.theme_mode == ThemeMode::Dark), { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
    menu.add("View/Toggle Syntax Highlighting", Shortcut::None, toggle_flag(settings.highlighting_enabled), { let s = *s; move |_| s.send(Message::ToggleHighlighting) });

    // Documentation
    menu.add("Documentation/GLSL", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowDocumentation(Category::Shading)) });
    menu.add("Documentation/.BSS", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowDocumentation(Category::ShaderState)) });
}
