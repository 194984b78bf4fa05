//! Live parsing position
//!
//! A growable stack of frames mirroring the parser's location in the
//! document. Frame 0 is always the synthetic root; object entries are
//! modelled as their own frames so the innermost frame always answers
//! `key()` and a match on `$.a.b` is two child hops.

use std::fmt::Write as _;

/// Kind tag for a live position frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Root,
    Object,
    Array,
}

/// One frame of the live position stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionFrame {
    /// Synthetic document root
    Root,
    /// Inside the named object entry
    Entry { key: String },
    /// Inside an array; the counter advances before each element is announced
    Array { index: i64 },
}

impl PositionFrame {
    #[must_use]
    pub fn kind(&self) -> FrameKind {
        match self {
            Self::Root => FrameKind::Root,
            Self::Entry { .. } => FrameKind::Object,
            Self::Array { .. } => FrameKind::Array,
        }
    }
}

/// Mutable stack of frames reflecting the parser's location
#[derive(Debug, Default)]
pub struct CurrentPosition {
    frames: Vec<PositionFrame>,
}

impl CurrentPosition {
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(16),
        }
    }

    pub fn push_root(&mut self) {
        self.frames.push(PositionFrame::Root);
    }

    pub fn step_into_entry(&mut self, key: &str) {
        self.frames.push(PositionFrame::Entry {
            key: key.to_string(),
        });
    }

    /// Push an array frame; the index starts one before the first element.
    pub fn step_into_array(&mut self) {
        self.frames.push(PositionFrame::Array { index: -1 });
    }

    pub fn step_out(&mut self) -> Option<PositionFrame> {
        self.frames.pop()
    }

    /// Advance the innermost array counter. Must run before the element
    /// is matched; `$[0]` never fires otherwise.
    pub fn accumulate_array_index(&mut self) {
        if let Some(PositionFrame::Array { index }) = self.frames.last_mut() {
            *index += 1;
        }
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&PositionFrame> {
        self.frames.get(index)
    }

    /// Innermost frame
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&PositionFrame> {
        self.frames.last()
    }

    #[inline]
    #[must_use]
    pub fn peek_kind(&self) -> Option<FrameKind> {
        self.frames.last().map(PositionFrame::kind)
    }

    /// Current object key if the innermost frame is an entry
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self.frames.last() {
            Some(PositionFrame::Entry { key }) => Some(key),
            _ => None,
        }
    }

    /// Canonical dot-and-bracket form of the position, e.g. `$.a.b[3].c`
    #[must_use]
    pub fn json_path(&self) -> String {
        let mut rendered = String::with_capacity(self.frames.len() * 8);
        rendered.push('$');
        for frame in &self.frames {
            match frame {
                PositionFrame::Root => {}
                PositionFrame::Entry { key } => {
                    rendered.push('.');
                    rendered.push_str(key);
                }
                PositionFrame::Array { index } => {
                    let _ = write!(rendered, "[{index}]");
                }
            }
        }
        rendered
    }
}
