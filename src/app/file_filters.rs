/// Filter for the Open dialog, one option per line.
///
/// FLTK format: "Description\tPattern\nDescription2\tPattern2".
/// FLTK appends "All Files (*)" itself.
pub fn shader_files_filter() -> String {
    [
        "Shader Files\t*.bss",
        "GLSL Sources\t*.{glsl,vert,frag}",
    ]
    .join("\n")
}

/// Filter for the Save As dialog.
pub fn save_filter() -> String {
    "Shader Files\t*.bss\nAll Files\t*".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_filter_lists_bss_first() {
        let filter = shader_files_filter();
        let first = filter.lines().next().unwrap();
        assert_eq!(first, "Shader Files\t*.bss");
        assert!(filter.contains("*.{glsl,vert,frag}"));
    }

    #[test]
    fn test_every_line_has_description_and_pattern() {
        for line in shader_files_filter().lines().chain(save_filter().lines()) {
            let (desc, pattern) = line.split_once('\t').unwrap();
            assert!(!desc.is_empty());
            assert!(pattern.starts_with('*'));
        }
    }
}
