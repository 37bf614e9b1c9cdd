//! Persistent lexical environments.
//!
//! Both the type environment (Γ) and the value environment (ρ) are the same
//! shape: an immutable, parent-linked scope chain. Binding prepends a node
//! and returns a new environment; nothing is ever mutated after creation, so
//! chains may be shared freely across sibling scopes and captured by
//! closures that outlive the frame that created them.

use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct Env<T> {
    head: Option<Rc<Node<T>>>,
}

#[derive(Debug)]
struct Node<T> {
    name: String,
    value: T,
    parent: Option<Rc<Node<T>>>,
}

impl<T> Env<T> {
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Return a child environment with `name` bound to `value`. The
    /// receiver is untouched; the nearest binding wins on lookup, which is
    /// what makes shadowing work.
    pub fn bind(&self, name: impl Into<String>, value: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                name: name.into(),
                value,
                parent: self.head.clone(),
            })),
        }
    }

    /// Walk the chain from the most recent binding outward. The empty name
    /// never matches.
    pub fn lookup(&self, name: &str) -> Option<&T> {
        if name.is_empty() {
            return None;
        }
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            if n.name == name {
                return Some(&n.value);
            }
            node = n.parent.as_deref();
        }
        None
    }
}

impl<T> Default for Env<T> {
    fn default() -> Self {
        Self::new()
    }
}
