//! Append-only buffer for MathProg model text.

use std::fmt::Display;

/// Collects the sections of a model. Every method appends exactly one section.
#[derive(Debug, Default, Clone)]
pub struct ModelWriter {
    text: String,
}

impl ModelWriter {

    pub fn new() -> Self {
        ModelWriter::default()
    }

    /// Appends `set <name> := { e0, e1, ... };`, or `set <name> := {};` if `elements` is empty.
    pub fn set_literal<I, T>(&mut self, name: &str, elements: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        let mut elements = elements.into_iter().peekable();
        self.text.push_str("set ");
        self.text.push_str(name);
        self.text.push_str(" := {");
        if elements.peek().is_some() {
            self.text.push(' ');
            let mut first = true;
            for elem in elements {
                if !first {
                    self.text.push_str(", ");
                }
                first = false;
                self.text.push_str(&elem.to_string());
            }
            self.text.push(' ');
        }
        self.text.push_str("};\n");
        self
    }

    /// Appends `line` followed by a newline.
    pub fn line(&mut self, line: &str) -> &mut Self {
        self.text.push_str(line);
        self.text.push('\n');
        self
    }

    /// Appends an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.text.push('\n');
        self
    }

    /// Appends the `end;` statement and returns the model.
    pub fn finish(mut self) -> String {
        self.text.push_str("end;");
        self.text
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// A pair rendered as `(a, b)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Pair(pub usize, pub usize);

impl Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
