use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Apply {
    pub func: Box<Syntax>,
    pub arg: Box<Syntax>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Lambda {
    pub param: String,
    pub body: Box<Syntax>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Let {
    pub var: String,
    pub defn: Box<Syntax>,
    pub body: Box<Syntax>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Syntax {
    Identifier(Identifier),
    Apply(Apply),
    Lambda(Lambda),
    Let(Let),
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Syntax::Identifier(Identifier { name }) => write!(f, "{name}"),
            Syntax::Apply(Apply { func, arg }) => write!(f, "({func} {arg})"),
            Syntax::Lambda(Lambda { param, body }) => write!(f, "(fn {param} => {body})"),
            Syntax::Let(Let { var, defn, body }) => {
                write!(f, "(let {var} = {defn} in {body})")
            }
        }
    }
}

pub fn new_identifier(name: &str) -> Syntax {
    Syntax::Identifier(Identifier {
        name: name.to_string(),
    })
}

pub fn new_apply(func: Syntax, arg: Syntax) -> Syntax {
    Syntax::Apply(Apply {
        func: Box::new(func),
        arg: Box::new(arg),
    })
}

pub fn new_lambda(param: &str, body: Syntax) -> Syntax {
    Syntax::Lambda(Lambda {
        param: param.to_string(),
        body: Box::new(body),
    })
}

pub fn new_let(var: &str, defn: Syntax, body: Syntax) -> Syntax {
    Syntax::Let(Let {
        var: var.to_string(),
        defn: Box::new(defn),
        body: Box::new(body),
    })
}
