use fltk::dialog::{FileDialogType, NativeFileChooser, NativeFileChooserOptions};

use crate::app::file_filters::{save_filter, shader_files_filter};

fn run_chooser(
    kind: FileDialogType,
    options: NativeFileChooserOptions,
    filter: &str,
    directory: Option<&str>,
) -> Option<String> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_filter(filter);
    nfc.set_option(options);
    if let Some(dir) = directory {
        if let Err(e) = nfc.set_directory(&dir) {
            log::debug!("Ignoring dialog directory {}: {:?}", dir, e);
        }
    }
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

pub fn native_open_dialog(directory: Option<&str>) -> Option<String> {
    run_chooser(
        FileDialogType::BrowseFile,
        NativeFileChooserOptions::NoOptions,
        &shader_files_filter(),
        directory,
    )
}

pub fn native_save_dialog(directory: Option<&str>) -> Option<String> {
    run_chooser(
        FileDialogType::BrowseSaveFile,
        NativeFileChooserOptions::SaveAsConfirm,
        &save_filter(),
        directory,
    )
}
