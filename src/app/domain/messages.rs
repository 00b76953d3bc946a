use crate::app::services::highlight::Category;

/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileQuit,
    WindowClose,

    // View
    ToggleLineNumbers,
    ToggleWordWrap,
    ToggleDarkMode,
    ToggleHighlighting,

    // Documentation
    ShowDocumentation(Category),

    // Any insert or delete in the document buffer
    BufferModified,
}
