//! Descendant tree rendering.
//!
//! Output looks like:
//!
//! ```text
//! 1: Peterson George (man)
//!  +- 11: Peterson Jane (woman)
//!  |  \- 100: Smith John (man)
//!  \- 12: Peterson Sue (woman)
//! ```
//!
//! Children are listed in the order they were added. A person reachable
//! through both parents is printed under each of them.

use std::fmt::Write;

use kindred_foundation::{Error, PersonHandle, Result};

use crate::registry::Registry;

const BRANCH: &str = " +- ";
const LAST_BRANCH: &str = " \\- ";
const PIPE: &str = " | ";
const SPACE: &str = "   ";

/// A pending line: the text that goes before the person, and the indentation
/// their own children inherit.
struct Frame {
    handle: PersonHandle,
    lead: String,
    indent: String,
}

/// Writes a person and all of their descendants as an indented tree.
pub struct DescendantPrinter<'a> {
    registry: &'a Registry,
}

impl<'a> DescendantPrinter<'a> {
    /// Creates a printer over `registry`.
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Writes the tree rooted at `root` to `sink`, one `\n`-terminated line
    /// per person, in preorder.
    ///
    /// # Errors
    ///
    /// Returns `UnknownHandle` if `root` is not in the registry, or `Write`
    /// if the sink fails.
    pub fn print<W: Write>(&self, root: PersonHandle, sink: &mut W) -> Result<()> {
        if self.registry.get(root).is_none() {
            return Err(Error::unknown_handle(root));
        }

        // Iterative preorder walk.
        let mut stack = vec![Frame {
            handle: root,
            lead: String::new(),
            indent: String::new(),
        }];

        while let Some(frame) = stack.pop() {
            let Some(person) = self.registry.get(frame.handle) else {
                continue;
            };
            writeln!(sink, "{}{person}", frame.lead)?;

            let children = self.registry.children(frame.handle);
            let last = children.len().saturating_sub(1);
            // Pushed in reverse so the first child pops first.
            for (i, child) in children.iter().enumerate().rev() {
                let (branch, continuation) = if i == last {
                    (LAST_BRANCH, SPACE)
                } else {
                    (BRANCH, PIPE)
                };
                stack.push(Frame {
                    handle: *child,
                    lead: format!("{}{branch}", frame.indent),
                    indent: format!("{}{continuation}", frame.indent),
                });
            }
        }

        Ok(())
    }
}
