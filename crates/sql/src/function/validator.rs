//! Argument validators.
//!
//! Validators only reject what they can prove wrong: an argument whose type is
//! still unresolved, or resolved to the null type, is always accepted.

use super::argument::ArgumentExpr;
use super::error::FunctionError;
use super::types::SqlType;
use std::fmt::Debug;
use std::sync::Arc;

pub trait ArgumentsValidator: Send + Sync + Debug {
    fn validate(&self, args: &[ArgumentExpr], function_name: &str) -> Result<(), FunctionError>;

    /// Runs `self`, then `next`.
    fn and<V>(self, next: V) -> CompositeValidator
    where
        Self: Sized + 'static,
        V: ArgumentsValidator + 'static,
    {
        CompositeValidator(vec![Arc::new(self), Arc::new(next)])
    }
}

#[derive(Debug, Clone)]
pub struct CompositeValidator(Vec<Arc<dyn ArgumentsValidator>>);

impl CompositeValidator {
    pub fn then<V: ArgumentsValidator + 'static>(mut self, next: V) -> Self {
        self.0.push(Arc::new(next));
        self
    }
}

impl ArgumentsValidator for CompositeValidator {
    fn validate(&self, args: &[ArgumentExpr], function_name: &str) -> Result<(), FunctionError> {
        self.0
            .iter()
            .try_for_each(|validator| validator.validate(args, function_name))
    }

    fn and<V>(self, next: V) -> CompositeValidator
    where
        V: ArgumentsValidator + 'static,
    {
        self.then(next)
    }
}

fn known(arg: &ArgumentExpr) -> Option<&SqlType> {
    arg.ty().filter(|ty| !ty.is_null())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentCount {
    Exactly(usize),
    Between(usize, usize),
    AtLeast(usize),
}

impl ArgumentsValidator for ArgumentCount {
    fn validate(&self, args: &[ArgumentExpr], function_name: &str) -> Result<(), FunctionError> {
        let given = args.len();
        let message = match *self {
            ArgumentCount::Exactly(n) if given != n => format!(
                "Function {}() has {} parameters, but {} arguments given",
                function_name, n, given
            ),
            ArgumentCount::Between(min, max) if given < min || given > max => format!(
                "Function {}() requires between {} and {} arguments, but {} arguments given",
                function_name, min, max, given
            ),
            ArgumentCount::AtLeast(min) if given < min => format!(
                "Function {}() requires at least {} arguments, but {} arguments given",
                function_name, min, given
            ),
            _ => return Ok(()),
        };
        Err(FunctionError::arity(function_name, message))
    }
}

/// The argument at `index` must be an array of basic values.
#[derive(Debug, Clone, Copy)]
pub struct ArrayArgument {
    pub index: usize,
}

impl ArgumentsValidator for ArrayArgument {
    fn validate(&self, args: &[ArgumentExpr], function_name: &str) -> Result<(), FunctionError> {
        let Some(ty) = args.get(self.index).and_then(known) else {
            return Ok(());
        };
        match ty {
            SqlType::Plural(plural) if plural.is_nested() => Err(FunctionError::argument(
                function_name,
                self.index,
                format!(
                    "Parameter {} of function '{}()' requires an array of basic values, but argument is of type '{}'",
                    self.index, function_name, ty
                ),
            )),
            SqlType::Plural(_) => Ok(()),
            SqlType::Basic(_) => Err(FunctionError::argument(
                function_name,
                self.index,
                format!(
                    "Parameter {} of function '{}()' requires an array type, but argument is of type '{}'",
                    self.index, function_name, ty
                ),
            )),
        }
    }
}

/// Arguments at `element_indexes` must be elements of the array at `array_index`.
///
/// An argument of the array type itself is accepted too, for the deprecated
/// overloads that take an array where an element is expected.
#[derive(Debug, Clone)]
pub struct ArrayAndElement {
    pub array_index: usize,
    pub element_indexes: Vec<usize>,
}

impl ArrayAndElement {
    pub fn new(array_index: usize, element_indexes: &[usize]) -> Self {
        Self {
            array_index,
            element_indexes: element_indexes.to_vec(),
        }
    }
}

impl ArgumentsValidator for ArrayAndElement {
    fn validate(&self, args: &[ArgumentExpr], function_name: &str) -> Result<(), FunctionError> {
        let Some(array) = args
            .get(self.array_index)
            .and_then(known)
            .and_then(SqlType::as_plural)
        else {
            return Ok(());
        };

        for &index in &self.element_indexes {
            let Some(element) = args.get(index).and_then(known) else {
                continue;
            };
            let accepted = match element {
                SqlType::Basic(data_type) => *data_type == array.element,
                SqlType::Plural(plural) => plural.same_elements(array),
            };
            if !accepted {
                return Err(FunctionError::argument(
                    function_name,
                    index,
                    format!(
                        "Parameter {} of function '{}()' must be of type '{}' to match the element type of parameter {}, but argument is of type '{}'",
                        index, function_name, array.element, self.array_index, element
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// All arguments must be arrays with the same element type. The first
/// resolved argument is the reference.
#[derive(Debug, Clone, Copy)]
pub struct ArraysOfSameType;

impl ArgumentsValidator for ArraysOfSameType {
    fn validate(&self, args: &[ArgumentExpr], function_name: &str) -> Result<(), FunctionError> {
        let mut reference: Option<&SqlType> = None;
        for (index, arg) in args.iter().enumerate() {
            let Some(ty) = known(arg) else {
                continue;
            };
            ArrayArgument { index }.validate(args, function_name)?;
            let Some(expected) = reference else {
                reference = Some(ty);
                continue;
            };
            let same = match (expected.as_plural(), ty.as_plural()) {
                (Some(expected), Some(actual)) => expected.same_elements(actual),
                _ => false,
            };
            if !same {
                return Err(FunctionError::argument(
                    function_name,
                    index,
                    format!(
                        "Parameter {} of function '{}()' requires an array type '{}', but argument is of type '{}'",
                        index, function_name, expected, ty
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Elements of an array constructor must be basic values of one type.
#[derive(Debug, Clone, Copy)]
pub struct ArrayConstructorArguments;

impl ArgumentsValidator for ArrayConstructorArguments {
    fn validate(&self, args: &[ArgumentExpr], function_name: &str) -> Result<(), FunctionError> {
        let mut first: Option<&SqlType> = None;
        for (index, arg) in args.iter().enumerate() {
            let Some(ty) = known(arg) else {
                continue;
            };
            if ty.is_plural() {
                return Err(FunctionError::argument(
                    function_name,
                    index,
                    format!(
                        "Parameter {} of function '{}()' requires a basic value, but argument is of type '{}'",
                        index, function_name, ty
                    ),
                ));
            }
            match first {
                None => first = Some(ty),
                Some(expected) if expected != ty => {
                    return Err(FunctionError::argument(
                        function_name,
                        index,
                        format!(
                            "Parameter {} of function '{}()' has type '{}', but previous arguments have type '{}'",
                            index, function_name, ty, expected
                        ),
                    ))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// The optional argument at `index` must be a boolean literal (or `NULL`).
#[derive(Debug, Clone, Copy)]
pub struct BooleanLiteralArgument {
    pub index: usize,
}

impl ArgumentsValidator for BooleanLiteralArgument {
    fn validate(&self, args: &[ArgumentExpr], function_name: &str) -> Result<(), FunctionError> {
        match args.get(self.index) {
            None => Ok(()),
            Some(arg) if arg.boolean_literal().is_some() || arg.is_null_literal() => Ok(()),
            Some(_) => Err(FunctionError::argument(
                function_name,
                self.index,
                format!(
                    "Parameter {} of function '{}()' must be a boolean literal",
                    self.index, function_name
                ),
            )),
        }
    }
}
