use std::collections::HashMap;

use crate::interpreter::value::Value;

/// A set of variable bindings plus the result slot for `the answer is`.
///
/// Namespaces are flat: there is no scope chain and no closure capture.
/// Calling a function copies every binding of the calling namespace into a
/// fresh one (see [`Namespace::call_scope`]), so writes inside the callee are
/// invisible to the caller. Functions themselves live in the namespace as
/// ordinary [`Value::Function`] bindings and travel into call scopes the same
/// way, which is what makes recursion work.
///
/// The result of a function is kept in a dedicated slot rather than under a
/// reserved binding name, so user variables can never collide with it.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    bindings: HashMap<String, Value>,
    answer:   Option<Value>,
}

impl Namespace {
    /// Creates an empty namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a name to a value, replacing any previous binding.
    pub fn bind(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Looks up a binding.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Builds the namespace a function call runs in: a copy of every current
    /// binding, with an empty result slot.
    #[must_use]
    pub fn call_scope(&self) -> Self {
        Self { bindings: self.bindings.clone(),
               answer:   None, }
    }

    /// Records the function result. A later `the answer is` overwrites an
    /// earlier one, matching assignment semantics.
    pub fn set_answer(&mut self, value: Value) {
        self.answer = Some(value);
    }

    /// Whether the result slot has been filled.
    ///
    /// Blocks check this after every statement and stop early once an answer
    /// exists. Loops deliberately do not; only the call boundary consumes the
    /// slot.
    #[must_use]
    pub const fn has_answer(&self) -> bool {
        self.answer.is_some()
    }

    /// Takes the function result out of the slot, leaving it empty.
    pub fn take_answer(&mut self) -> Option<Value> {
        self.answer.take()
    }
}
