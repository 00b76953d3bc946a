use fltk::{
    enums::{Color, Font},
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::domain::FontChoice;
use crate::app::services::highlight::Category;

/// Foreground color for a highlight category.
pub fn category_color(category: Category, is_dark: bool) -> Color {
    match (category, is_dark) {
        (Category::Shading, false) => Color::from_rgb(0, 0, 255),
        (Category::ShaderState, false) => Color::from_rgb(0, 140, 0),
        (Category::Shading, true) => Color::from_rgb(110, 170, 255),
        (Category::ShaderState, true) => Color::from_rgb(120, 210, 120),
    }
}

pub fn font_for(choice: FontChoice) -> Font {
    match choice {
        FontChoice::ScreenBold => Font::ScreenBold,
        FontChoice::Courier => Font::Courier,
        FontChoice::HelveticaMono => Font::Screen,
    }
}

/// Widget colors for one theme. The cursor takes the shading keyword color
/// so it stays visible against highlighted text in both themes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorPalette {
    pub background: Color,
    pub text: Color,
    pub cursor: Color,
    pub selection: Color,
    pub gutter_bg: Color,
    pub gutter_fg: Color,
    pub chrome: Color,
    pub menu_text: Color,
    pub menu_hover: Color,
}

impl EditorPalette {
    pub fn for_theme(is_dark: bool) -> Self {
        let cursor = category_color(Category::Shading, is_dark);
        if is_dark {
            Self {
                background: Color::from_rgb(28, 30, 36),
                text: Color::from_rgb(214, 218, 226),
                cursor,
                selection: Color::from_rgb(62, 68, 96),
                gutter_bg: Color::from_rgb(36, 38, 46),
                gutter_fg: Color::from_rgb(130, 136, 150),
                chrome: Color::from_rgb(32, 34, 40),
                menu_text: Color::from_rgb(214, 218, 226),
                menu_hover: Color::from_rgb(56, 60, 72),
            }
        } else {
            Self {
                background: Color::White,
                text: Color::Black,
                cursor,
                selection: Color::from_rgb(196, 214, 240),
                gutter_bg: Color::from_rgb(236, 238, 242),
                gutter_fg: Color::from_rgb(110, 114, 124),
                chrome: Color::from_rgb(236, 238, 242),
                menu_text: Color::Black,
                menu_hover: Color::from_rgb(204, 210, 222),
            }
        }
    }
}

pub fn apply_theme(editor: &mut TextEditor, window: &mut Window, menu: &mut MenuBar, is_dark: bool) {
    let p = EditorPalette::for_theme(is_dark);

    editor.set_color(p.background);
    editor.set_text_color(p.text);
    editor.set_cursor_color(p.cursor);
    editor.set_selection_color(p.selection);
    editor.set_linenumber_bgcolor(p.gutter_bg);
    editor.set_linenumber_fgcolor(p.gutter_fg);
    window.set_color(p.chrome);
    menu.set_color(p.chrome);
    menu.set_text_color(p.menu_text);
    menu.set_selection_color(p.menu_hover);

    editor.redraw();
    window.redraw();
    menu.redraw();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_colors_differ() {
        for is_dark in [false, true] {
            assert_ne!(
                category_color(Category::Shading, is_dark),
                category_color(Category::ShaderState, is_dark)
            );
        }
    }

    #[test]
    fn test_light_theme_keeps_blue_and_green() {
        assert_eq!(category_color(Category::Shading, false), Color::from_rgb(0, 0, 255));
        assert_eq!(category_color(Category::ShaderState, false), Color::from_rgb(0, 140, 0));
    }

    #[test]
    fn test_editor_palette_cursor_uses_keyword_color() {
        for is_dark in [false, true] {
            let palette = EditorPalette::for_theme(is_dark);
            assert_eq!(palette.cursor, category_color(Category::Shading, is_dark));
            assert_ne!(palette.background, palette.text);
        }
        assert_ne!(EditorPalette::for_theme(true), EditorPalette::for_theme(false));
    }

    #[test]
    fn test_dark_palette_differs_from_light() {
        assert_ne!(
            category_color(Category::Shading, true),
            category_color(Category::Shading, false)
        );
    }
}
