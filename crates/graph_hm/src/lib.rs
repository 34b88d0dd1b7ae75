// Hindley-Milner type inference over a type graph kept in union-find form
pub mod checker;
pub mod context;
pub mod errors;
mod infer;
pub mod literal;
mod prelude;
pub mod syntax;
pub mod types;
mod unify;
pub mod util;

pub use crate::checker::Checker;
pub use crate::context::Context;
pub use crate::errors::Errors;

#[cfg(test)]
mod tests {
    use crate::checker::*;
    use crate::context::*;
    use crate::errors::*;
    use crate::syntax::*;

    fn test_env() -> (Checker, Context) {
        let mut checker = Checker::default();
        let ctx = checker.prelude();
        (checker, ctx)
    }

    fn infer(syntax: &Syntax) -> Result<String, Errors> {
        let (mut checker, ctx) = test_env();
        let t = checker.infer_expression(syntax, &ctx)?;
        Ok(checker.print_type(t))
    }

    #[test]
    fn test_factorial() -> Result<(), Errors> {
        // let factorial = fix (fn self => fn n =>
        //     cond (zero n) 1 (times n (self (pred n))))
        // in factorial 5
        let syntax = new_let(
            "factorial",
            new_apply(
                new_identifier("fix"),
                new_lambda(
                    "self",
                    new_lambda(
                        "n",
                        new_apply(
                            new_apply(
                                new_apply(
                                    new_identifier("cond"),
                                    new_apply(new_identifier("zero"), new_identifier("n")),
                                ),
                                new_identifier("1"),
                            ),
                            new_apply(
                                new_apply(new_identifier("times"), new_identifier("n")),
                                new_apply(
                                    new_identifier("self"),
                                    new_apply(new_identifier("pred"), new_identifier("n")),
                                ),
                            ),
                        ),
                    ),
                ),
            ),
            new_apply(new_identifier("factorial"), new_identifier("5")),
        );

        assert_eq!(infer(&syntax)?, "int");
        Ok(())
    }

    #[test]
    fn test_mismatch() {
        // fn x => pair (x 3) (x true)
        let syntax = new_lambda(
            "x",
            new_apply(
                new_apply(
                    new_identifier("pair"),
                    new_apply(new_identifier("x"), new_identifier("3")),
                ),
                new_apply(new_identifier("x"), new_identifier("true")),
            ),
        );

        assert_eq!(
            infer(&syntax),
            Err(Errors::TypeMismatch("bool".to_string(), "int".to_string()))
        );
    }

    #[test]
    fn test_pair() {
        // pair (f 4) (f true)
        let syntax = new_apply(
            new_apply(
                new_identifier("pair"),
                new_apply(new_identifier("f"), new_identifier("4")),
            ),
            new_apply(new_identifier("f"), new_identifier("true")),
        );

        assert_eq!(
            infer(&syntax),
            Err(Errors::UndefinedSymbol("f".to_string()))
        );
    }

    #[test]
    fn test_mul() -> Result<(), Errors> {
        // let f = (fn x => x) in ((pair (f 4)) (f true))
        let syntax = new_let(
            "f",
            new_lambda("x", new_identifier("x")),
            new_apply(
                new_apply(
                    new_identifier("pair"),
                    new_apply(new_identifier("f"), new_identifier("4")),
                ),
                new_apply(new_identifier("f"), new_identifier("true")),
            ),
        );

        assert_eq!(infer(&syntax)?, "(int * bool)");
        Ok(())
    }

    #[test]
    fn test_recursive() -> Result<(), Errors> {
        // fn f => f f
        let syntax = new_lambda(
            "f",
            new_apply(new_identifier("f"), new_identifier("f")),
        );

        assert_eq!(infer(&syntax)?, "((... -> a) -> a)");
        Ok(())
    }

    #[test]
    fn test_number_literal() -> Result<(), Errors> {
        // let g = fn f => 5 in g g
        let syntax = new_let(
            "g",
            new_lambda("f", new_identifier("5")),
            new_apply(new_identifier("g"), new_identifier("g")),
        );

        assert_eq!(infer(&syntax)?, "int");
        Ok(())
    }

    #[test]
    fn test_generic_nongeneric() -> Result<(), Errors> {
        // example that demonstrates generic and non-generic variables:
        // fn g => let f = fn x => g in pair (f 3) (f true)
        let syntax = new_lambda(
            "g",
            new_let(
                "f",
                new_lambda("x", new_identifier("g")),
                new_apply(
                    new_apply(
                        new_identifier("pair"),
                        new_apply(new_identifier("f"), new_identifier("3")),
                    ),
                    new_apply(new_identifier("f"), new_identifier("true")),
                ),
            ),
        );

        assert_eq!(infer(&syntax)?, "(a -> (a * a))");
        Ok(())
    }

    #[test]
    fn test_basic_generics() -> Result<(), Errors> {
        // fn x => x
        let syntax = new_lambda("x", new_identifier("x"));

        assert_eq!(infer(&syntax)?, "(a -> a)");
        Ok(())
    }

    #[test]
    fn test_composition() -> Result<(), Errors> {
        // Function composition
        // fn f (fn g (fn arg (g (f arg))))
        let syntax = new_lambda(
            "f",
            new_lambda(
                "g",
                new_lambda(
                    "arg",
                    new_apply(
                        new_identifier("g"),
                        new_apply(new_identifier("f"), new_identifier("arg")),
                    ),
                ),
            ),
        );

        assert_eq!(infer(&syntax)?, "((a -> b) -> ((b -> c) -> (a -> c)))");
        Ok(())
    }

    #[test]
    fn test_undefined_symbol() {
        let syntax = new_identifier("undefinedVar");

        let result = infer(&syntax);

        assert_eq!(
            result,
            Err(Errors::UndefinedSymbol("undefinedVar".to_string()))
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "Undefined symbol undefinedVar"
        );
    }
}
