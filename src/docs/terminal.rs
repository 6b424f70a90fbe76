//! Terminal width detection and description truncation.
//!
//! Only the plain-text renderer truncates; Markdown and JSON output is meant
//! to wrap or be consumed programmatically.

#![allow(unsafe_code)]

const ELLIPSIS: char = '…';

/// Reports the display width available to the report.
pub trait WidthProvider {
    /// Width in columns, or `None` when the output is not a terminal.
    fn width(&self) -> Option<usize>;
}

/// Queries the terminal attached to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalWidth;

impl WidthProvider for TerminalWidth {
    #[cfg(unix)]
    fn width(&self) -> Option<usize> {
        let mut size = libc::winsize {
            ws_row: 0,
            ws_col: 0,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };

        // SAFETY: TIOCGWINSZ only writes a `winsize` through the pointer,
        // which refers to a live, properly aligned local.
        let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };
        if rc != 0 || size.ws_col == 0 {
            return None;
        }

        Some(usize::from(size.ws_col))
    }

    #[cfg(not(unix))]
    fn width(&self) -> Option<usize> {
        None
    }
}

/// A width fixed up front; `None` behaves like redirected output.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedWidth(pub Option<usize>);

impl WidthProvider for FixedWidth {
    fn width(&self) -> Option<usize> {
        self.0
    }
}

/// Shortens messages to half of the detected display width.
pub struct Truncator<'a> {
    width: &'a dyn WidthProvider,
}

impl<'a> Truncator<'a> {
    /// Creates a truncator backed by `width`.
    pub fn new(width: &'a dyn WidthProvider) -> Self {
        Self { width }
    }

    /// Trims `msg` so it fits half the display, ending it with `…`.
    ///
    /// Messages are returned untouched when no width can be detected.
    pub fn trim(&self, msg: &str) -> String {
        match self.width.width() {
            Some(width) => trim_to(msg, width / 2),
            None => msg.to_string(),
        }
    }
}

/// Trims `msg` to at most `target` characters, the last being `…`.
///
/// A zero target leaves no room for the ellipsis and yields an empty string.
pub fn trim_to(msg: &str, target: usize) -> String {
    if msg.chars().count() <= target {
        return msg.to_string();
    }
    if target == 0 {
        return String::new();
    }

    let mut trimmed: String = msg.chars().take(target.saturating_sub(1)).collect();
    trimmed.push(ELLIPSIS);
    trimmed
}
