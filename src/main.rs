use fltk::{app, enums::Event, prelude::*};

use shader_pad::app::domain::{AppSettings, Message};
use shader_pad::app::state::AppState;
use shader_pad::ui::main_window::build_main_window;
use shader_pad::ui::menu::build_menu;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    log::info!("Settings loaded from {}", AppSettings::get_config_path().display());

    let mut w = build_main_window();
    build_menu(&mut w.menu, &sender, &settings);

    // Route the window close button through the unsaved-changes check.
    w.wind.set_callback({
        let s = sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    let mut state = AppState::new(w.text_editor, w.wind, w.menu, sender, settings);
    state.bind_document();

    // A shader file path on the command line is opened at startup.
    if let Some(path) = std::env::args().nth(1) {
        state.open_file(path);
    }

    state.window.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if state.handle(msg) {
                log::info!("Exiting");
                app.quit();
            }
        }
    }
}
