use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        namespace::Namespace,
        value::Value,
    },
};

impl Context {
    /// Calls a user-defined function and hands back the namespace it ran in.
    ///
    /// The call resolves the function binding, checks that every declared
    /// parameter was supplied, evaluates the arguments in the calling
    /// namespace, and runs the body inside a copy of the caller's bindings.
    /// Nothing the callee does leaks back by itself; the caller decides what
    /// to read out of the returned scope, which for `and call it` is the
    /// answer slot.
    ///
    /// Extra arguments that the function never declared are allowed and
    /// simply become bindings in the call scope.
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownFunction`] if the name is not bound to a
    ///   function.
    /// - [`RuntimeError::MissingParameter`] if a declared parameter has no
    ///   argument.
    /// - Any error raised while evaluating arguments or running the body.
    pub fn run_call(&mut self,
                    name: &str,
                    arguments: &[(String, Expr)],
                    line: usize,
                    namespace: &Namespace)
                    -> EvalResult<Namespace> {
        let function = match namespace.get(name) {
            Some(Value::Function(function)) => Rc::clone(function),
            _ => {
                return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                           line });
            },
        };

        for parameter in &function.params {
            if !arguments.iter().any(|(supplied, _)| supplied == parameter) {
                return Err(RuntimeError::MissingParameter { function:  name.to_string(),
                                                            parameter: parameter.clone(),
                                                            line });
            }
        }

        let mut scope = namespace.call_scope();
        for (parameter, value) in arguments {
            let value = self.evaluate(value, namespace)?;
            scope.bind(parameter, value);
        }

        self.run(&function.body, &mut scope)?;
        Ok(scope)
    }
}
