use std::collections::HashSet;

/// Highlight category a keyword belongs to.
///
/// Each category owns one style character in the FLTK style buffer; `'A'` is
/// reserved for plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// GLSL-like shading language keywords.
    Shading,
    /// `.BSS` shader-state directives (`$`-prefixed).
    ShaderState,
}

impl Category {
    /// Style character used in the style buffer.
    pub fn style_char(self) -> char {
        match self {
            Self::Shading => 'B',
            Self::ShaderState => 'C',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Shading => "glsl",
            Self::ShaderState => "bss",
        }
    }

    pub fn all() -> &'static [Category] {
        &[Self::Shading, Self::ShaderState]
    }
}

pub const GLSL_KEYWORDS: &[&str] = &[
    "float", "vec2", "vec3", "vec4", "mat2", "mat3", "mat4",
    "texture", "sampler2D", "samplerCube", "varying",
    "gl_Position", "gl_FragColor", "uniform", "in", "out",
    "void", "main", "if", "else", "for", "while", "return",
    "true", "false", "int", "ivec2", "ivec3", "ivec4",
    "uvec2", "uvec3", "uvec4", "dvec2", "dvec3", "dvec4",
    "bool", "bvec2", "bvec3", "bvec4", "struct",
];

pub const BSS_KEYWORDS: &[&str] = &[
    "$global_determinator", "$shader_vertex", "$shader_fragment",
    "$begin", "$end", "$invalid_state", "$branch",
];

/// An immutable set of keywords tagged with the category they highlight as.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    category: Category,
    words: HashSet<&'static str>,
}

impl KeywordSet {
    pub fn new(category: Category, words: &[&'static str]) -> Self {
        Self {
            category,
            words: words.iter().copied().collect(),
        }
    }

    pub fn glsl() -> Self {
        Self::new(Category::Shading, GLSL_KEYWORDS)
    }

    pub fn bss() -> Self {
        Self::new(Category::ShaderState, BSS_KEYWORDS)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Keywords in lexical order, for documentation display.
    pub fn sorted(&self) -> Vec<&'static str> {
        let mut words: Vec<&'static str> = self.words.iter().copied().collect();
        words.sort_unstable();
        words
    }
}

/// The two keyword sets the highlighter checks, in application order.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub shading: KeywordSet,
    pub shader_state: KeywordSet,
}

impl Vocabulary {
    pub fn new(shading: KeywordSet, shader_state: KeywordSet) -> Self {
        Self { shading, shader_state }
    }

    /// Sets in the order their marks are applied. Later sets win on overlap.
    pub fn sets(&self) -> [&KeywordSet; 2] {
        [&self.shading, &self.shader_state]
    }

    pub fn set_for(&self, category: Category) -> &KeywordSet {
        match category {
            Category::Shading => &self.shading,
            Category::ShaderState => &self.shader_state,
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(KeywordSet::glsl(), KeywordSet::bss())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sets_sizes() {
        assert_eq!(KeywordSet::glsl().len(), GLSL_KEYWORDS.len());
        assert_eq!(KeywordSet::bss().len(), 7);
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let glsl = KeywordSet::glsl();
        assert!(glsl.contains("sampler2D"));
        assert!(!glsl.contains("Sampler2D"));
        assert!(!glsl.contains("VEC3"));
    }

    #[test]
    fn test_bss_words_are_directives() {
        let bss = KeywordSet::bss();
        assert!(bss.sorted().iter().all(|w| w.starts_with('$')));
        assert!(bss.contains("$shader_vertex"));
        assert!(!bss.contains("shader_vertex"));
    }

    #[test]
    fn test_sets_do_not_overlap() {
        let vocab = Vocabulary::default();
        for word in vocab.shading.sorted() {
            assert!(!vocab.shader_state.contains(word), "{} in both sets", word);
        }
    }

    #[test]
    fn test_sorted_is_ordered() {
        let sorted = KeywordSet::bss().sorted();
        assert_eq!(sorted.first(), Some(&"$begin"));
        assert_eq!(sorted.last(), Some(&"$shader_vertex"));
    }

    #[test]
    fn test_style_chars_distinct() {
        assert_ne!(Category::Shading.style_char(), Category::ShaderState.style_char());
        assert!(Category::all().iter().all(|c| c.style_char() != 'A'));
    }

    #[test]
    fn test_vocabulary_order() {
        let vocab = Vocabulary::default();
        let [first, second] = vocab.sets();
        assert_eq!(first.category(), Category::Shading);
        assert_eq!(second.category(), Category::ShaderState);
        assert_eq!(vocab.set_for(Category::ShaderState).category(), Category::ShaderState);
    }
}
