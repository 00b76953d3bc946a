mod highlighter;
mod keywords;

pub use highlighter::{PLAIN_STYLE, Mark, MarkSet, highlight, plain_style, style_string};
pub use keywords::{BSS_KEYWORDS, Category, GLSL_KEYWORDS, KeywordSet, Vocabulary};
