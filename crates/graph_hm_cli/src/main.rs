use std::env;

use graph_hm::syntax::*;
use graph_hm::Checker;

fn id(name: &str) -> Syntax {
    new_identifier(name)
}

fn apply_all(func: Syntax, args: &[Syntax]) -> Syntax {
    args.iter()
        .fold(func, |func, arg| new_apply(func, arg.to_owned()))
}

fn demos() -> Vec<(&'static str, Syntax)> {
    // let factorial = fix (fn self => fn n =>
    //     cond (zero n) 1 (times n (self (pred n))))
    // in factorial 5
    let factorial = new_let(
        "factorial",
        new_apply(
            id("fix"),
            new_lambda(
                "self",
                new_lambda(
                    "n",
                    apply_all(
                        id("cond"),
                        &[
                            new_apply(id("zero"), id("n")),
                            id("1"),
                            apply_all(
                                id("times"),
                                &[id("n"), new_apply(id("self"), new_apply(id("pred"), id("n")))],
                            ),
                        ],
                    ),
                ),
            ),
        ),
        new_apply(id("factorial"), id("5")),
    );

    // let f = fn x => x in pair (f 4) (f true)
    let let_poly = new_let(
        "f",
        new_lambda("x", id("x")),
        apply_all(
            id("pair"),
            &[new_apply(id("f"), id("4")), new_apply(id("f"), id("true"))],
        ),
    );

    // let g = fn f => 5 in g g
    let self_apply_let = new_let(
        "g",
        new_lambda("f", id("5")),
        new_apply(id("g"), id("g")),
    );

    // fn g => let f = fn x => g in pair (f 3) (f true)
    let generic_nongeneric = new_lambda(
        "g",
        new_let(
            "f",
            new_lambda("x", id("g")),
            apply_all(
                id("pair"),
                &[new_apply(id("f"), id("3")), new_apply(id("f"), id("true"))],
            ),
        ),
    );

    // fn f => fn g => fn arg => g (f arg)
    let composition = new_lambda(
        "f",
        new_lambda(
            "g",
            new_lambda(
                "arg",
                new_apply(id("g"), new_apply(id("f"), id("arg"))),
            ),
        ),
    );

    // fn f => f f
    let self_apply = new_lambda("f", new_apply(id("f"), id("f")));

    // fn g => pair (g 3) (g true)
    let monomorphic_param = new_lambda(
        "g",
        apply_all(
            id("pair"),
            &[new_apply(id("g"), id("3")), new_apply(id("g"), id("true"))],
        ),
    );

    vec![
        ("factorial", factorial),
        ("let_poly", let_poly),
        ("self_apply_let", self_apply_let),
        ("generic_nongeneric", generic_nongeneric),
        ("composition", composition),
        ("self_apply", self_apply),
        ("monomorphic_param", monomorphic_param),
        ("undefined", id("undefinedVar")),
    ]
}

fn main() {
    let selected: Vec<String> = env::args().skip(1).collect();
    let demos = demos();

    for name in &selected {
        if !demos.iter().any(|(demo, _)| demo == name) {
            println!("unknown demo: {name}");
        }
    }

    for (name, syntax) in &demos {
        if !selected.is_empty() && !selected.iter().any(|s| s == name) {
            continue;
        }

        // one session per demo so type variable names restart at `a`
        let mut checker = Checker::default();
        let ctx = checker.prelude();
        match checker.infer_expression(syntax, &ctx) {
            Ok(t) => println!("{syntax} : {}", checker.print_type(t)),
            Err(error) => println!("{syntax} : {error}"),
        }
    }
}
