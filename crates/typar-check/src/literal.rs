//! Types of call arguments written as literals or variable names.

use log::trace;
use rustc_hash::FxHashMap;
use typar_infer::TypeExpr;

/// An argument expression at a call site.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    None,
    List(Vec<Expr>),
    /// A variable reference
    Name(String),
}

/// Assigns types to argument expressions.
pub struct LiteralTyper<'a> {
    list_base: &'a str,
    variables: &'a FxHashMap<String, TypeExpr>,
}

impl<'a> LiteralTyper<'a> {
    pub fn new(list_base: &'a str, variables: &'a FxHashMap<String, TypeExpr>) -> Self {
        Self { list_base, variables }
    }

    pub fn type_of(&self, expr: &Expr) -> TypeExpr {
        match expr {
            Expr::Int(_) => TypeExpr::concrete("int"),
            Expr::Float(_) => TypeExpr::concrete("float"),
            Expr::Str(_) => TypeExpr::concrete("str"),
            Expr::Bool(_) => TypeExpr::concrete("bool"),
            Expr::None => TypeExpr::concrete("None"),
            Expr::List(elements) => {
                TypeExpr::generic(self.list_base, vec![self.element_type(elements)])
            }
            Expr::Name(name) => match self.variables.get(name) {
                Some(ty) => ty.clone(),
                None => {
                    trace!("no type known for `{}`", name);
                    TypeExpr::Unknown
                }
            },
        }
    }

    /// The type shared by every element whose type is known; `Unknown` when
    /// there is no such element or the elements disagree.
    fn element_type(&self, elements: &[Expr]) -> TypeExpr {
        let mut common: Option<TypeExpr> = None;
        for ty in elements.iter().map(|e| self.type_of(e)) {
            if ty.is_unknown() {
                continue;
            }
            let existing = common.get_or_insert_with(|| ty.clone());
            if *existing != ty {
                return TypeExpr::Unknown;
            }
        }
        common.unwrap_or(TypeExpr::Unknown)
    }
}
