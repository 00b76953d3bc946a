use fltk::{
    button::Button,
    enums::{Align, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    text::{TextBuffer, TextDisplay, WrapMode},
    window::Window,
};

use super::show_modal;
use crate::app::services::highlight::{Category, KeywordSet};
use crate::ui::theme::category_color;

pub fn documentation_title(category: Category) -> &'static str {
    match category {
        Category::Shading => "GLSL Documentation",
        Category::ShaderState => ".BSS Documentation",
    }
}

fn description(category: Category) -> &'static str {
    match category {
        Category::Shading => {
            "GLSL (OpenGL Shading Language) is a high-level shading language used with OpenGL and Vulkan."
        }
        Category::ShaderState => ".BSS is a custom shader language used in Pathos engine.",
    }
}

/// Body text: description followed by the highlighted keywords, one per line.
pub fn documentation_body(set: &KeywordSet) -> String {
    let mut body = String::from(description(set.category()));
    body.push_str("\n\nHighlighted keywords:\n");
    for word in set.sorted() {
        body.push_str("- ");
        body.push_str(word);
        body.push('\n');
    }
    body
}

/// Show the documentation window for one keyword category.
pub fn show_documentation_dialog(set: &KeywordSet, is_dark: bool) {
    let category = set.category();
    let mut dialog = Window::default()
        .with_size(420, 460)
        .with_label(documentation_title(category))
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 400, 440, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label(documentation_title(category));
    title.set_label_size(18);
    title.set_label_font(Font::HelveticaBold);
    title.set_label_color(category_color(category, is_dark));
    title.set_align(Align::Left | Align::Inside);
    flex.fixed(&title, 30);

    let mut body_buf = TextBuffer::default();
    body_buf.set_text(&documentation_body(set));
    let mut body = TextDisplay::default();
    body.set_buffer(body_buf);
    body.wrap_mode(WrapMode::AtBounds, 0);
    body.set_text_font(Font::Courier);
    body.set_text_size(13);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 35);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    show_modal(&mut dialog);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(documentation_title(Category::Shading), "GLSL Documentation");
        assert_eq!(documentation_title(Category::ShaderState), ".BSS Documentation");
    }

    #[test]
    fn test_body_lists_every_keyword() {
        let set = KeywordSet::bss();
        let body = documentation_body(&set);
        assert!(body.starts_with(".BSS is a custom shader language"));
        for word in set.sorted() {
            assert!(body.contains(&format!("- {}\n", word)));
        }
        assert_eq!(body.lines().filter(|l| l.starts_with("- ")).count(), set.len());
    }

    #[test]
    fn test_glsl_body() {
        let body = documentation_body(&KeywordSet::glsl());
        assert!(body.contains("OpenGL Shading Language"));
        assert!(body.contains("- gl_FragColor\n"));
    }
}
