use std::collections::HashSet;

use crate::ast::params::ParamDescriptor;
use crate::dialect::SchemaType;

/// An insertion point recorded by [`SqlWriter::mark`].
#[derive(Debug)]
pub(crate) struct Mark(usize);

/// Two-phase output buffer plus the per-compile session state.
///
/// Phase one appends text segments in statement order, reserving marks where
/// a later pass may need to insert text (the ROW_NUMBER pagination rewrite).
/// Phase two resolves marks with `splice` and `finish` flattens the segments.
/// A writer lives for exactly one top-level compile.
#[derive(Debug)]
pub(crate) struct SqlWriter {
    segments: Vec<String>,
    capture: Vec<String>,
    /// Statement nesting depth; pagination applies only at depth 1.
    pub depth: usize,
    /// Schema type currently being created, for context-sensitive keywords.
    pub creating: Option<SchemaType>,
    /// Parameter names excluded from placeholder prefixing because they are
    /// routine-local variables.
    pub locals: HashSet<String>,
    /// Ordered parameter descriptors collected during emission.
    pub params: Vec<ParamDescriptor>,
}

impl SqlWriter {
    pub fn new() -> Self {
        Self {
            segments: vec![String::new()],
            capture: Vec::new(),
            depth: 0,
            creating: None,
            locals: HashSet::new(),
            params: Vec::new(),
        }
    }

    /// Append text at the current position (or to the active capture).
    pub fn push(&mut self, text: &str) {
        if let Some(top) = self.capture.last_mut() {
            top.push_str(text);
        } else {
            self.segments
                .last_mut()
                .expect("writer always holds a tail segment")
                .push_str(text);
        }
    }

    /// Reserve an insertion point at the current position.
    ///
    /// Marks cannot be taken while a capture is active; captured text has no
    /// stable position in the segment list.
    pub fn mark(&mut self) -> Mark {
        debug_assert!(self.capture.is_empty(), "mark inside capture");
        self.segments.push(String::new());
        let mark = Mark(self.segments.len() - 1);
        self.segments.push(String::new());
        mark
    }

    /// Insert text at a previously reserved mark.
    pub fn splice(&mut self, mark: &Mark, text: &str) {
        self.segments[mark.0].push_str(text);
    }

    /// Redirect subsequent pushes into a side buffer.
    pub fn begin_capture(&mut self) {
        self.capture.push(String::new());
    }

    /// Stop capturing and return the captured text.
    pub fn end_capture(&mut self) -> String {
        self.capture.pop().unwrap_or_default()
    }

    pub fn enter(&mut self) {
        self.depth += 1;
    }

    pub fn exit(&mut self) {
        self.depth -= 1;
    }

    /// Flatten all segments into the final SQL string.
    pub fn finish(self) -> (String, Vec<ParamDescriptor>) {
        (self.segments.concat(), self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice_inserts_at_mark() {
        let mut w = SqlWriter::new();
        w.push("SELECT ");
        let m = w.mark();
        w.push("a FROM t");
        w.splice(&m, "ROW_NUMBER() OVER (ORDER BY a) AS _rowNum, ");
        let (sql, _) = w.finish();
        assert_eq!(sql, "SELECT ROW_NUMBER() OVER (ORDER BY a) AS _rowNum, a FROM t");
    }

    #[test]
    fn test_capture_diverts_pushes() {
        let mut w = SqlWriter::new();
        w.push("x");
        w.begin_capture();
        w.push("captured");
        let got = w.end_capture();
        w.push("y");
        assert_eq!(got, "captured");
        assert_eq!(w.finish().0, "xy");
    }

    #[test]
    fn test_multiple_marks_resolve_in_order() {
        let mut w = SqlWriter::new();
        let outer = w.mark();
        w.push("inner");
        let tail = w.mark();
        w.splice(&outer, "A(");
        w.splice(&tail, ")B");
        assert_eq!(w.finish().0, "A(inner)B");
    }
}
