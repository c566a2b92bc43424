use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared, mutable handle to an [`Environment`].
///
/// Function values capture their defining environment through this handle, so
/// a scope stays alive for as long as any closure over it does.
pub type Env = Rc<RefCell<Environment>>;

/// A name-to-value mapping with an optional enclosing scope.
///
/// Environments form a chain: lookups walk outward through enclosing scopes,
/// while bindings always write to the innermost scope. A `let` in an inner
/// scope therefore never rebinds a name in an ancestor; it creates a fresh
/// binding that shadows it.
///
/// # Example
/// ```
/// use monkey::interpreter::{environment::Environment, value::core::Value};
///
/// let outer = Environment::new();
/// outer.borrow_mut().set("x".to_string(), Value::Integer(1));
///
/// let inner = Environment::new_enclosed(&outer);
/// assert_eq!(inner.borrow().get("x"), Some(Value::Integer(1)));
///
/// inner.borrow_mut().set("x".to_string(), Value::Integer(2));
/// assert_eq!(inner.borrow().get("x"), Some(Value::Integer(2)));
/// assert_eq!(outer.borrow().get("x"), Some(Value::Integer(1)));
/// ```
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates an empty top-level environment.
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: None, }))
    }

    /// Creates an empty environment enclosed by `outer`.
    ///
    /// Used for every function call: parameters are bound in the new scope
    /// while names from the function's defining scope stay reachable.
    #[must_use]
    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks up a name, walking outward through enclosing scopes on a miss.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.store
            .get(name)
            .cloned()
            .or_else(|| self.outer.as_ref().and_then(|outer| outer.borrow().get(name)))
    }

    /// Binds a name in this scope, replacing any existing binding here.
    ///
    /// Never rebinds in an enclosing scope.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}
