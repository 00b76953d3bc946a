pub mod documentation;

use fltk::{app, prelude::*, window::Window};

/// Show `dialog` and pump events until it is hidden. A pending program quit
/// (main window closed underneath) hides it too.
pub fn show_modal(dialog: &mut Window) {
    dialog.show();
    while dialog.shown() {
        if !app::wait() || app::should_program_quit() {
            dialog.hide();
        }
    }
}
