use generational_arena::Index;
use log::debug;

use crate::checker::Checker;
use crate::context::*;
use crate::errors::*;
use crate::syntax::*;
use crate::util::*;

impl Checker {
    /// Computes the type of the expression given by `node`.
    ///
    /// The type of the node is computed in the context of the supplied
    /// context `ctx`.  Data types can be introduced into the language simply
    /// by having a predefined set of identifiers in the initial context; this
    /// way there is no need to change the syntax or the type checker when
    /// extending the language.
    ///
    /// Errors:
    ///     UndefinedSymbol: an identifier is neither bound nor an integer.
    ///     TypeMismatch: two types could not be unified, e.g. `int` and `bool`.
    pub fn infer_expression(&mut self, node: &Syntax, ctx: &Context) -> Result<Index, Errors> {
        match node {
            Syntax::Identifier(Identifier { name }) => {
                debug!("infer identifier: {name}");
                self.get_type(name, ctx)
            }
            Syntax::Apply(Apply { func, arg }) => {
                debug!("infer application: {node}");
                let func_type = self.infer_expression(func, ctx)?;
                let arg_type = self.infer_expression(arg, ctx)?;
                let ret_type = self.new_var();
                let call_type = self.new_func_type(arg_type, ret_type);
                self.unify(call_type, func_type, ctx)?;
                Ok(find(&mut self.arena, ret_type))
            }
            Syntax::Lambda(Lambda { param, body }) => {
                debug!("infer lambda: {node}");
                let param_type = self.new_var();
                let new_ctx = ctx.bind_non_generic(param, param_type);
                let body_type = self.infer_expression(body, &new_ctx)?;
                Ok(self.new_func_type(param_type, body_type))
            }
            Syntax::Let(Let { var, defn, body }) => {
                debug!("infer let: {var}");
                // `defn` can't refer to `var`, recursion goes through `fix`
                let defn_type = self.infer_expression(defn, ctx)?;
                let new_ctx = ctx.bind(var, defn_type);
                self.infer_expression(body, &new_ctx)
            }
        }
    }
}
