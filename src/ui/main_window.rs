use fltk::{
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
}

pub fn build_main_window() -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, "Untitled - Shader Editor");
    wind.set_xclass("ShaderPad");

    let mut flex = Flex::new(0, 0, 800, 600, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());

    flex.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        menu,
        text_editor,
    }
}
