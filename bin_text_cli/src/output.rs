use std::io::{self, Write};

use crate::config::OutputConfig;

/// How encoded text is laid out when written.
#[derive(Debug, Clone, Copy)]
pub struct TextLayout {
    /// Characters per line, or `0` for a single line.
    pub wrap: usize,
    pub trailing_newline: bool,
}

impl TextLayout {
    pub fn from_config(config: &OutputConfig, wrap: Option<usize>) -> Self {
        Self {
            wrap: wrap.unwrap_or(config.wrap),
            trailing_newline: config.trailing_newline,
        }
    }

    /// Writes ascii `text` according to this layout.
    pub fn write<W: Write>(self, mut writer: W, text: &str) -> io::Result<()> {
        debug_assert!(text.is_ascii(), "wrapping splits at byte offsets");

        if self.wrap == 0 || text.len() <= self.wrap {
            writer.write_all(text.as_bytes())?;
        } else {
            let mut lines = text.as_bytes().chunks(self.wrap).peekable();
            while let Some(line) = lines.next() {
                writer.write_all(line)?;
                if lines.peek().is_some() {
                    writer.write_all(b"\n")?;
                }
            }
        }

        if self.trailing_newline && !text.is_empty() {
            writer.write_all(b"\n")?;
        }

        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(wrap: usize, trailing_newline: bool, text: &str) -> String {
        let mut out = Vec::new();
        TextLayout {
            wrap,
            trailing_newline,
        }
        .write(&mut out, text)
        .expect("write to Vec cannot fail");

        String::from_utf8(out).expect("output must be utf-8")
    }

    #[test]
    fn no_wrap() {
        assert_eq!(layout(0, false, "00FF1A"), "00FF1A");
        assert_eq!(layout(0, true, "00FF1A"), "00FF1A\n");
    }

    #[test]
    fn wrap_lines() {
        assert_eq!(layout(4, false, "JBSWY3DP"), "JBSW\nY3DP");
        assert_eq!(layout(3, true, "JBSWY3DP"), "JBS\nWY3\nDP\n");
        assert_eq!(layout(8, true, "JBSWY3DP"), "JBSWY3DP\n");
    }

    #[test]
    fn empty_text() {
        assert_eq!(layout(4, true, ""), "");
    }

    #[test]
    fn flag_overrides_config() {
        let config = OutputConfig {
            wrap: 76,
            trailing_newline: false,
        };

        assert_eq!(TextLayout::from_config(&config, None).wrap, 76);
        assert_eq!(TextLayout::from_config(&config, Some(0)).wrap, 0);
    }
}
