//! Horizontal mouse drag over the card.
//!
//! The drag offset is a UI-local signal. It only feeds back into the session
//! as a discrete swipe once the button is released past the threshold.

use crate::deck::Decision;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    origin: u16,
    current: u16,
}

impl DragGesture {
    pub fn start(column: u16) -> Self {
        Self {
            origin: column,
            current: column,
        }
    }

    pub fn move_to(&mut self, column: u16) {
        self.current = column;
    }

    /// Signed horizontal offset in columns; positive is rightwards.
    pub fn offset(&self) -> i32 {
        i32::from(self.current) - i32::from(self.origin)
    }

    /// Direction the card leans while dragging, with no threshold.
    pub fn lean(&self) -> Option<Decision> {
        direction(self.offset())
    }

    /// Decision committed on release, if the offset reached `threshold`.
    pub fn release(self, threshold: u16) -> Option<Decision> {
        if self.offset().unsigned_abs() < u32::from(threshold) {
            return None;
        }
        direction(self.offset())
    }
}

fn direction(offset: i32) -> Option<Decision> {
    match offset {
        o if o > 0 => Some(Decision::Like),
        o if o < 0 => Some(Decision::Dislike),
        _ => None,
    }
}
