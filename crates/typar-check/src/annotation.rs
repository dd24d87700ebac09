//! Parsing of type annotations such as `Sequence[T]` or `Mapping[str, int]`.
//!
//! Grammar:
//!
//! ```text
//! type := NAME ( '[' type ( ',' type )* ']' )?
//! NAME := [A-Za-z_][A-Za-z0-9_.]*
//! ```
//!
//! A bare `NAME` that is one of the declared type parameters becomes a
//! [`TypeExpr::Param`].

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;
use typar_infer::{FunctionSignature, TypeExpr, TypeParameter};

use crate::error::{CheckError, CheckResult};

/// Syntax errors in an annotation. Spans are offsets into the annotation text.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("empty type annotation")]
    #[diagnostic(code(typar_check::annotation::empty))]
    Empty,

    #[error("expected {expected}, found {found}")]
    #[diagnostic(code(typar_check::annotation::unexpected))]
    Unexpected {
        expected: &'static str,
        found: String,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("`{name}` has an empty argument list")]
    #[diagnostic(code(typar_check::annotation::empty_arguments))]
    EmptyArguments {
        name: String,
        #[label("expected at least one type argument")]
        span: SourceSpan,
    },

    #[error("type parameter `{name}` cannot take type arguments")]
    #[diagnostic(code(typar_check::annotation::applied_parameter))]
    AppliedParameter {
        name: String,
        #[label("declared as a type parameter")]
        span: SourceSpan,
    },
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
    declared: &'a [TypeParameter],
}

impl<'a> Parser<'a> {
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn unexpected(&self, expected: &'static str) -> AnnotationError {
        let (found, len) = match self.peek() {
            Some(c) => (format!("`{}`", c), c.len_utf8()),
            None => ("end of input".to_string(), 0),
        };
        AnnotationError::Unexpected {
            expected,
            found,
            span: (self.pos, len).into(),
        }
    }

    fn expect(&mut self, c: char, expected: &'static str) -> Result<(), AnnotationError> {
        self.skip_whitespace();
        if self.peek() == Some(c) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn name(&mut self) -> Result<(&'a str, SourceSpan), AnnotationError> {
        self.skip_whitespace();
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_alphabetic() || c == '_' => {}
            _ => return Err(self.unexpected("a type name")),
        }
        while let Some(c) = self.peek() {
            if !(c.is_alphanumeric() || c == '_' || c == '.') {
                break;
            }
            self.pos += c.len_utf8();
        }
        Ok((&self.text[start..self.pos], (start, self.pos - start).into()))
    }

    fn type_expr(&mut self) -> Result<TypeExpr, AnnotationError> {
        let (name, span) = self.name()?;
        let is_param = self.declared.iter().any(|p| p.name() == name);

        self.skip_whitespace();
        if self.peek() != Some('[') {
            return Ok(if is_param {
                TypeExpr::param(name)
            } else {
                TypeExpr::concrete(name)
            });
        }
        if is_param {
            return Err(AnnotationError::AppliedParameter { name: name.to_string(), span });
        }

        let open = self.pos;
        self.pos += 1;
        self.skip_whitespace();
        if self.peek() == Some(']') {
            return Err(AnnotationError::EmptyArguments {
                name: name.to_string(),
                span: (open, self.pos + 1 - open).into(),
            });
        }

        let mut args = vec![self.type_expr()?];
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                    args.push(self.type_expr()?);
                }
                _ => break,
            }
        }
        self.expect(']', "`,` or `]`")?;

        Ok(TypeExpr::generic(name, args))
    }
}

/// Parses one annotation; names listed in `declared` are type parameters.
pub fn parse_annotation(text: &str, declared: &[TypeParameter]) -> Result<TypeExpr, AnnotationError> {
    if text.trim().is_empty() {
        return Err(AnnotationError::Empty);
    }
    let mut parser = Parser { text, pos: 0, declared };
    let ty = parser.type_expr()?;
    parser.skip_whitespace();
    if parser.pos != text.len() {
        return Err(parser.unexpected("end of annotation"));
    }
    Ok(ty)
}

/// Builds a signature from annotation text, e.g.
/// `parse_signature("first", &["T"], &["Sequence[T]"], "T")`.
pub fn parse_signature(
    name: &str,
    type_params: &[&str],
    params: &[&str],
    ret: &str,
) -> CheckResult<FunctionSignature> {
    let declared: Vec<TypeParameter> = type_params.iter().map(|n| TypeParameter::new(*n)).collect();
    let annotate = |text: &str| {
        parse_annotation(text, &declared).map_err(|source| CheckError::InvalidAnnotation {
            text: text.to_string(),
            source,
        })
    };

    let params = params.iter().map(|p| annotate(*p)).collect::<CheckResult<Vec<_>>>()?;
    let ret = annotate(ret)?;
    Ok(FunctionSignature::new(name, declared, params, ret)?)
}
