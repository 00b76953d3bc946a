use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Window title for a document: `*` prefix when there are unsaved changes.
pub fn window_title(display_name: &str, dirty: bool) -> String {
    let prefix = if dirty { "*" } else { "" };
    format!("{}{} - Shader Editor", prefix, display_name)
}

/// Pixel width of the line number gutter for a buffer with `line_count` lines.
pub fn linenumber_width(line_count: usize) -> i32 {
    let digits = ((line_count + 1) as f64).log10().floor() as i32 + 1;
    (digits * 8 + 16).max(40)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename("/home/user/water.bss"), "water.bss");
        assert_eq!(extract_filename("shaders/sky.frag"), "sky.frag");
    }

    #[test]
    fn test_extract_filename_fallback() {
        assert_eq!(extract_filename(""), "Unknown");
        assert_eq!(extract_filename("/"), "Unknown");
    }

    #[test]
    fn test_window_title() {
        assert_eq!(window_title("Untitled", false), "Untitled - Shader Editor");
        assert_eq!(window_title("a.bss", true), "*a.bss - Shader Editor");
    }

    #[test]
    fn test_linenumber_width() {
        assert_eq!(linenumber_width(0), 40);
        assert_eq!(linenumber_width(50), 40);
        assert_eq!(linenumber_width(12_345), 56);
    }
}
