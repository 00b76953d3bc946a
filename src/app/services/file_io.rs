use std::fs;
use std::path::Path;

use crate::app::infrastructure::error::{AppError, Result};

/// Read a whole file as UTF-8 text.
pub fn read_document(path: &str) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_string(),
        source,
    })?;
    log::info!("Loaded {} ({} bytes)", path, content.len());
    Ok(content)
}

/// Write `text` to `path`, replacing any existing content.
pub fn write_document(path: &str, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| AppError::Write {
        path: path.to_string(),
        source,
    })?;
    log::info!("Saved {} ({} bytes)", path, text.len());
    Ok(())
}

/// Directory a path lives in, used to seed the next file dialog.
pub fn parent_directory(path: &str) -> Option<String> {
    Path::new(path)
        .parent()
        .map(|p| p.to_string_lossy().to_string())
        .filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::highlight::{Vocabulary, highlight};
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.bss");
        let path = path.to_str().unwrap();

        let err = read_document(path).unwrap_err();
        assert!(matches!(err, AppError::Read { .. }));
        assert!(err.to_string().contains("missing.bss"));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.bss");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let result = read_document(path.to_str().unwrap());
        assert!(matches!(result, Err(AppError::Read { .. })));
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.bss");
        let path = path.to_str().unwrap();

        let text = "$begin\n$shader_vertex\nvoid main() {}\n$end\n";
        write_document(path, text).unwrap();
        assert_eq!(read_document(path).unwrap(), text);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("out.bss");

        let err = write_document(path.to_str().unwrap(), "x").unwrap_err();
        assert!(matches!(err, AppError::Write { .. }));
    }

    #[test]
    fn test_loaded_text_highlights_like_typed_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shader.bss");
        let typed = "$global_determinator\n$shader_fragment\nuniform sampler2D tex;\nvoid main() { gl_FragColor = texture(tex, uv); }\n";
        fs::write(&path, typed).unwrap();

        let loaded = read_document(path.to_str().unwrap()).unwrap();
        let vocab = Vocabulary::default();
        assert_eq!(highlight(&loaded, &vocab), highlight(typed, &vocab));
    }

    #[test]
    fn test_parent_directory() {
        assert_eq!(parent_directory("/home/user/a.bss"), Some("/home/user".to_string()));
        assert_eq!(parent_directory("a.bss"), None);
    }
}
