/// Terminal capability probe. Read-only presentation signals; nothing in
/// the quiz logic depends on these for correctness.
#[derive(Debug, Clone, Copy)]
pub struct TermCaps {
    pub width: u16,
    pub height: u16,
    pub truecolor: bool,
    pub unicode: bool,
}

impl Default for TermCaps {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            truecolor: false,
            unicode: true,
        }
    }
}

impl TermCaps {
    pub fn detect() -> Self {
        let (width, height) = ratatui::crossterm::terminal::size().unwrap_or((80, 24));
        Self {
            width,
            height,
            truecolor: truecolor_from(std::env::var("COLORTERM").ok().as_deref()),
            unicode: unicode_from(
                std::env::var("LC_ALL")
                    .or_else(|_| std::env::var("LANG"))
                    .ok()
                    .as_deref(),
            ),
        }
    }

    /// Pick the unicode glyph when the locale supports it, an ASCII
    /// fallback otherwise.
    pub fn icon<'a>(&self, unicode: &'a str, ascii: &'a str) -> &'a str {
        if self.unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn narrow(&self) -> bool {
        self.width < 80
    }
}

fn truecolor_from(colorterm: Option<&str>) -> bool {
    match colorterm {
        Some(v) => v.contains("truecolor") || v.contains("24bit"),
        None => false,
    }
}

fn unicode_from(locale: Option<&str>) -> bool {
    match locale {
        Some(v) => {
            let v = v.to_lowercase();
            v.contains("utf-8") || v.contains("utf8")
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truecolor_detection() {
        assert!(truecolor_from(Some("truecolor")));
        assert!(truecolor_from(Some("24bit")));
        assert!(!truecolor_from(Some("256color")));
        assert!(!truecolor_from(None));
    }

    #[test]
    fn unicode_detection() {
        assert!(unicode_from(Some("en_US.UTF-8")));
        assert!(unicode_from(Some("C.utf8")));
        assert!(!unicode_from(Some("POSIX")));
        assert!(!unicode_from(None));
    }

    #[test]
    fn icon_fallback() {
        let caps = TermCaps {
            width: 80,
            height: 24,
            truecolor: false,
            unicode: false,
        };
        assert_eq!(caps.icon("✓", "ok"), "ok");

        let caps = TermCaps { unicode: true, ..caps };
        assert_eq!(caps.icon("✓", "ok"), "✓");
    }
}
