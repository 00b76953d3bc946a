use std::ffi::{CStr, c_char, c_void};

use fltk::text::TextBuffer;

/// Copy the text out of an FLTK `TextBuffer`.
///
/// `TextBuffer::text()` never frees the `malloc()`'d string FLTK hands back,
/// which leaks a full copy of the document on each call. The highlighter reads
/// the buffer on every edit, so go through the C API and free it ourselves.
pub fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut c_void) -> *mut c_char;
        fn free(ptr: *mut c_void);
    }

    // SAFETY: `buf` wraps a live Fl_Text_Buffer. The returned pointer is either
    // null or a NUL-terminated string allocated with malloc, which we free
    // exactly once after copying it.
    unsafe {
        let raw = Fl_Text_Buffer_text(buf.as_ptr() as *mut c_void);
        if raw.is_null() {
            return String::new();
        }
        let text = CStr::from_ptr(raw).to_string_lossy().into_owned();
        free(raw as *mut c_void);
        text
    }
}
