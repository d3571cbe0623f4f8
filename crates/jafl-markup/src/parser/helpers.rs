//! Helper functions for the markup parser.
//!
//! This module contains utility functions used throughout the state machine:
//! - State transitions
//! - Input handling and the diagnostic position counters
//! - Element stack operations (push, attribute store, content append, pop)

use jafl_common::warning::warn_once;
use jafl_dom::Element;

use super::core::{HISTORY_LENGTH, MarkupParser, ParserState};
use crate::error::{Diagnostics, ParseError};
use crate::render::ElementRenderer;

// =============================================================================
// State Transition Helpers
// =============================================================================

impl MarkupParser {
    /// Transitions to a new state. The next character is consumed on the next
    /// iteration of the main loop.
    pub(super) const fn switch_to(&mut self, new_state: ParserState) {
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl MarkupParser {
    /// Returns the character at the current position and advances the position.
    /// Returns None at the end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        if self.history.len() == HISTORY_LENGTH {
            let _ = self.history.pop_front();
        }
        self.history.push_back(c);
        Some(c)
    }

    /// Snapshot of the parser for an error report.
    pub(super) fn diagnostics(&self) -> Box<Diagnostics> {
        Box::new(Diagnostics {
            offset: self.current_pos,
            line: self.line,
            mode: self.state,
            name: self.name.clone(),
            attribute: self.attribute.clone(),
            value: self.value.clone(),
            open_elements: self
                .stack
                .iter()
                .filter_map(|&id| self.tree.element(id))
                .map(|element| element.name.clone())
                .collect(),
            history: self.history.iter().collect(),
        })
    }
}

// =============================================================================
// Element Stack Helpers
// =============================================================================

impl MarkupParser {
    /// Name of the innermost open element.
    pub(super) fn current_element_name(&self) -> Option<&str> {
        let &id = self.stack.last()?;
        self.tree.element(id).map(|element| element.name.as_str())
    }

    /// Open a new element named after the name buffer.
    pub(super) fn push_element(&mut self) {
        let parent = self.stack.last().copied();
        let id = self.tree.alloc(Element::new(self.name.clone()), parent);
        self.stack.push(id);
    }

    /// Store the buffered attribute on the innermost open element.
    pub(super) fn store_attribute(&mut self) {
        let Some(&id) = self.stack.last() else {
            return;
        };
        if let Some(element) = self.tree.element_mut(id) {
            let _ = element
                .attributes
                .insert(self.attribute.clone(), self.value.clone());
        }
    }

    /// Append a literal character to the innermost open element, or to the
    /// output when no element is open.
    pub(super) fn append_content(&mut self, c: char) {
        match self.stack.last().and_then(|&id| self.tree.element_mut(id)) {
            Some(element) => element.content.push(c),
            None => self.output.push(c),
        }
    }

    /// Close the innermost element: render it, then hand the fragment to the
    /// output (top-level tag) or to the new innermost element.
    ///
    /// A non-top-level element closed with nothing left open has nowhere to
    /// go; its fragment is dropped with a warning.
    pub(super) fn pop_element<R: ElementRenderer>(
        &mut self,
        renderer: &R,
    ) -> Result<(), ParseError> {
        let Some(&id) = self.stack.last() else {
            return Ok(());
        };
        let Some(element) = self.tree.element(id) else {
            return Ok(());
        };

        let fragment = match renderer.render(element) {
            Ok(fragment) => fragment,
            Err(source) => {
                return Err(ParseError::Render {
                    element: element.name.clone(),
                    diagnostics: self.diagnostics(),
                    source: Box::new(source),
                });
            }
        };
        let is_top_level = element.name == self.top_level_tag;
        let _ = self.stack.pop();

        if is_top_level {
            self.output.push_str(&fragment);
        } else if let Some(parent) = self.stack.last().and_then(|&id| self.tree.element_mut(id))
        {
            parent.content.push_str(&fragment);
        } else {
            warn_once(
                "Markup",
                &format!(
                    "<{}> closed outside of any <{}>; its output was dropped",
                    self.name, self.top_level_tag
                ),
            );
        }
        Ok(())
    }
}
