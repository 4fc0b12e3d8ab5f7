/// Reinterprets an ASCII byte slice as a [`str`].
///
/// # Safety
///
/// `bytes` must only contain ASCII.
pub unsafe fn ascii_str(bytes: &[u8]) -> &str {
    debug_assert!(bytes.is_ascii(), "encoded output must be ascii");

    // SAFETY: caller guarantees the bytes are ascii, which is valid utf-8
    unsafe { std::str::from_utf8_unchecked(bytes) }
}

/// Reinterprets an ASCII byte buffer as a [`String`] without copying.
///
/// # Safety
///
/// `bytes` must only contain ASCII.
pub unsafe fn ascii_string(bytes: Vec<u8>) -> String {
    debug_assert!(bytes.is_ascii(), "encoded output must be ascii");

    // SAFETY: caller guarantees the bytes are ascii, which is valid utf-8
    unsafe { String::from_utf8_unchecked(bytes) }
}
