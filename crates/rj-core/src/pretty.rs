use std::fmt::{self, Formatter};

/// Configuration for pretty-printing the IR and the generated target code.
#[derive(Debug, Clone)]
pub struct PrettyOptions {
    /// Number of spaces to indent per nesting level.
    pub indent_size: usize,
    /// Include type annotations on IR expressions when they can be determined.
    pub show_types: bool,
}

impl Default for PrettyOptions {
    fn default() -> Self {
        Self {
            indent_size: 4,
            show_types: false,
        }
    }
}

impl PrettyOptions {
    pub fn with_indent(indent_size: usize) -> Self {
        Self {
            indent_size,
            ..Self::default()
        }
    }
}

/// Indentation state threaded through the printers.
pub struct PrettyCtx<'a> {
    pub options: &'a PrettyOptions,
    indent: usize,
}

impl<'a> PrettyCtx<'a> {
    pub fn new(options: &'a PrettyOptions) -> Self {
        Self { options, indent: 0 }
    }

    /// Write one line at the current indentation.
    pub fn writeln(&self, f: &mut Formatter<'_>, line: impl AsRef<str>) -> fmt::Result {
        writeln!(f, "{:indent$}{}", "", line.as_ref(), indent = self.indent)
    }

    /// Run `body` one nesting level deeper.
    pub fn with_indent<F>(&mut self, mut body: F) -> fmt::Result
    where
        F: FnMut(&mut Self) -> fmt::Result,
    {
        self.indent += self.options.indent_size;
        let result = body(self);
        self.indent = self.indent.saturating_sub(self.options.indent_size);
        result
    }
}

pub trait PrettyPrintable {
    fn fmt_pretty(&self, f: &mut Formatter<'_>, ctx: &mut PrettyCtx<'_>) -> fmt::Result;
}

struct Pretty<'a, T> {
    value: &'a T,
    options: PrettyOptions,
}

impl<T: PrettyPrintable> fmt::Display for Pretty<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.value.fmt_pretty(f, &mut PrettyCtx::new(&self.options))
    }
}

/// `Display` adapter for any [`PrettyPrintable`] node.
pub fn pretty<'a, T: PrettyPrintable>(value: &'a T, options: PrettyOptions) -> impl fmt::Display + 'a {
    Pretty { value, options }
}

/// Escape a string for a double-quoted literal. Control characters become
/// three-digit octal escapes.
pub fn escape_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch.is_control() => {
                use std::fmt::Write as _;
                let _ = write!(out, "\\{:03o}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}
