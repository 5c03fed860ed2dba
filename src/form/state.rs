use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::field::{FloatingTextField, ValueChanged};

use super::report::{FieldReport, FormReport};

/// A column of fields with at most one of them focused.
#[derive(Debug, Clone)]
pub struct FormState {
    pub title: Option<String>,
    fields: Vec<FloatingTextField>,
    focus: Option<usize>,
    dirty: bool,
}

impl FormState {
    pub fn new(fields: Vec<FloatingTextField>) -> Self {
        Self {
            title: None,
            fields,
            focus: None,
            dirty: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn fields(&self) -> &[FloatingTextField] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [FloatingTextField] {
        &mut self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused_field(&self) -> Option<&FloatingTextField> {
        self.focus.and_then(|index| self.fields.get(index))
    }

    /// Moves focus to `index`, blurring the previously focused field first.
    pub fn focus_field(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.fields.len() || self.focus == Some(index) {
            return false;
        }
        self.blur(now);
        self.fields[index].focus(now);
        self.focus = Some(index);
        true
    }

    /// Cycles focus by `delta`, wrapping at both ends.
    pub fn step_focus(&mut self, delta: i32, now: Instant) -> bool {
        let len = self.fields.len();
        if len == 0 {
            return false;
        }
        let next = match self.focus {
            Some(current) => (current as i64 + delta as i64).rem_euclid(len as i64) as usize,
            None if delta < 0 => len - 1,
            None => 0,
        };
        self.focus_field(next, now)
    }

    pub fn blur(&mut self, now: Instant) -> bool {
        let Some(index) = self.focus.take() else {
            return false;
        };
        self.fields[index].blur(now)
    }

    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> Option<ValueChanged> {
        let index = self.focus?;
        let change = self.fields[index].handle_key(key, now)?;
        self.dirty = true;
        Some(change)
    }

    pub fn handle_paste(&mut self, pasted: &str, now: Instant) -> Option<ValueChanged> {
        let index = self.focus?;
        let change = self.fields[index].handle_paste(pasted, now)?;
        self.dirty = true;
        Some(change)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn invalid_count(&self) -> usize {
        self.fields.iter().filter(|field| !field.is_valid()).count()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.fields.iter().any(|field| field.is_animating(now))
    }

    pub fn settle(&mut self, now: Instant) {
        for field in &mut self.fields {
            field.settle(now);
        }
    }

    pub fn report(&self, submitted: bool) -> FormReport {
        FormReport {
            title: self.title.clone(),
            submitted,
            fields: self.fields.iter().map(FieldReport::from).collect(),
        }
    }
}
