use log::debug;
use miette::SourceSpan;
use rustc_hash::FxHashMap;
use typar_infer::{
    Compatibility, ExactMatch, FunctionSignature, GenericCallResolver, TypeExpr,
};

use crate::{
    error::{CallWarning, CheckError},
    literal::{Expr, LiteralTyper},
    settings::CheckSettings,
};

/// A call expression `callee(args...)` at some location in the checked source.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub callee: String,
    pub args: Vec<Expr>,
    pub span: SourceSpan,
}

impl Call {
    pub fn new(callee: impl Into<String>, args: Vec<Expr>, span: impl Into<SourceSpan>) -> Self {
        Self { callee: callee.into(), args, span: span.into() }
    }
}

/// The outcome of checking one call that type-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedCall {
    pub ty: TypeExpr,
    pub warnings: Vec<CallWarning>,
}

/// Results of checking a sequence of calls.
#[derive(Debug, Default)]
pub struct Report {
    /// The type of every call, in order; `Unknown` for calls that failed.
    pub types: Vec<TypeExpr>,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CallWarning>,
}

impl Report {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Checks calls against a registry of function signatures.
pub struct CallChecker {
    settings: CheckSettings,
    functions: FxHashMap<String, FunctionSignature>,
    variables: FxHashMap<String, TypeExpr>,
    compat: Box<dyn Compatibility>,
}

impl CallChecker {
    pub fn new(settings: CheckSettings) -> Self {
        Self {
            settings,
            functions: FxHashMap::default(),
            variables: FxHashMap::default(),
            compat: Box::new(ExactMatch),
        }
    }

    pub fn with_compatibility(mut self, compat: impl Compatibility + 'static) -> Self {
        self.compat = Box::new(compat);
        self
    }

    pub fn settings(&self) -> &CheckSettings {
        &self.settings
    }

    /// Register a function; a later registration under the same name replaces the earlier one
    pub fn define_function(&mut self, signature: FunctionSignature) {
        self.functions.insert(signature.name().to_string(), signature);
    }

    pub fn define_variable(&mut self, name: impl Into<String>, ty: TypeExpr) {
        self.variables.insert(name.into(), ty);
    }

    pub fn lookup_function(&self, name: &str) -> Option<&FunctionSignature> {
        self.functions.get(name)
    }

    pub fn type_of(&self, expr: &Expr) -> TypeExpr {
        LiteralTyper::new(&self.settings.list_literal_base, &self.variables).type_of(expr)
    }

    /// Type one call, returning the instantiated return type of the callee.
    pub fn check_call(&self, call: &Call) -> Result<CheckedCall, CheckError> {
        let signature = self
            .lookup_function(&call.callee)
            .ok_or_else(|| CheckError::UnknownFunction {
                name: call.callee.clone(),
                span: call.span,
            })?;

        let arg_types: Vec<TypeExpr> = call.args.iter().map(|arg| self.type_of(arg)).collect();

        let inst = GenericCallResolver::new(&self.settings.inference)
            .with_compatibility(self.compat.as_ref())
            .resolve(signature, &arg_types)
            .map_err(|error| CheckError::InvalidCall {
                callee: call.callee.clone(),
                span: call.span,
                error,
            })?;

        let warnings = inst
            .warnings
            .into_iter()
            .map(|warning| CallWarning {
                callee: call.callee.clone(),
                span: call.span,
                warning,
            })
            .collect();

        Ok(CheckedCall { ty: inst.ret, warnings })
    }

    /// Check every call. A failing call is recorded and typed as `Unknown`;
    /// checking carries on with the next one.
    pub fn check_calls(&self, calls: &[Call]) -> Report {
        let mut report = Report::default();
        for call in calls {
            match self.check_call(call) {
                Ok(checked) => {
                    debug!("{}(...) : {}", call.callee, checked.ty);
                    report.types.push(checked.ty);
                    report.warnings.extend(checked.warnings);
                }
                Err(err) => {
                    debug!("{}(...) failed: {}", call.callee, err);
                    report.types.push(TypeExpr::Unknown);
                    report.errors.push(err);
                }
            }
        }
        report
    }
}

impl Default for CallChecker {
    fn default() -> Self {
        Self::new(CheckSettings::default())
    }
}
