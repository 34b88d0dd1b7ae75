use crate::checker::Checker;
use crate::context::Context;
use crate::types::*;

impl Checker {
    /// Builds the demonstration environment: booleans, products, sums, unit,
    /// the fixpoint combinator and a handful of arithmetic primitives.
    ///
    /// The type variables in these schemes are never in a non-generic set, so
    /// every lookup gets its own copy via `fresh`.
    pub fn prelude(&mut self) -> Context {
        let mut ctx = Context::default();

        let bool = self.new_basic(TypeOperator::boolean());
        ctx.values.insert("true".to_string(), bool);
        ctx.values.insert("false".to_string(), bool);

        // a -> b -> (a * b)
        let a = self.new_var();
        let b = self.new_var();
        let product = self.new_product_type(a, b);
        let inner = self.new_func_type(b, product);
        let pair = self.new_func_type(a, inner);
        ctx.values.insert("pair".to_string(), pair);

        // (a * b) -> a
        let a = self.new_var();
        let b = self.new_var();
        let product = self.new_product_type(a, b);
        let fst = self.new_func_type(product, a);
        ctx.values.insert("fst".to_string(), fst);

        // (a * b) -> b
        let a = self.new_var();
        let b = self.new_var();
        let product = self.new_product_type(a, b);
        let snd = self.new_func_type(product, b);
        ctx.values.insert("snd".to_string(), snd);

        // a -> (a + b)
        let a = self.new_var();
        let b = self.new_var();
        let sum = self.new_sum_type(a, b);
        let inl = self.new_func_type(a, sum);
        ctx.values.insert("inl".to_string(), inl);

        // b -> (a + b)
        let a = self.new_var();
        let b = self.new_var();
        let sum = self.new_sum_type(a, b);
        let inr = self.new_func_type(b, sum);
        ctx.values.insert("inr".to_string(), inr);

        // (a + b) -> (a -> c) -> (b -> c) -> c
        let a = self.new_var();
        let b = self.new_var();
        let c = self.new_var();
        let sum = self.new_sum_type(a, b);
        let on_left = self.new_func_type(a, c);
        let on_right = self.new_func_type(b, c);
        let last = self.new_func_type(on_right, c);
        let rest = self.new_func_type(on_left, last);
        let match_ = self.new_func_type(sum, rest);
        ctx.values.insert("match".to_string(), match_);

        let unit = self.new_basic(TypeOperator::unit());
        ctx.values.insert("unit".to_string(), unit);

        // unit -> a
        let a = self.new_var();
        let unit_case = self.new_func_type(unit, a);
        ctx.values.insert("unitCase".to_string(), unit_case);

        // ((a -> b) -> (a -> b)) -> (a -> b)
        let a = self.new_var();
        let b = self.new_var();
        let func = self.new_func_type(a, b);
        let step = self.new_func_type(func, func);
        let fix = self.new_func_type(step, func);
        ctx.values.insert("fix".to_string(), fix);

        // bool -> a -> a -> a
        let a = self.new_var();
        let else_ = self.new_func_type(a, a);
        let then = self.new_func_type(a, else_);
        let cond = self.new_func_type(bool, then);
        ctx.values.insert("cond".to_string(), cond);

        let int = self.new_basic(TypeOperator::integer());

        let zero = self.new_func_type(int, bool);
        ctx.values.insert("zero".to_string(), zero);

        let pred = self.new_func_type(int, int);
        ctx.values.insert("pred".to_string(), pred);

        let int_to_int = self.new_func_type(int, int);
        let times = self.new_func_type(int, int_to_int);
        ctx.values.insert("times".to_string(), times);

        ctx
    }
}
