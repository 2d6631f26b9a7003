//! Type inference for arguments and return values.
//!
//! Derived return types use one precedence order: the type inferred from the
//! surrounding expression, then the type implied by the caller, then the
//! type derived from the arguments.

use super::argument::ArgumentExpr;
use super::context::InferenceContext;
use super::ddl::{json_array_variant, resolve_array_type};
use super::types::{CollectionKind, SqlType};
use std::fmt::Debug;
use std::sync::Arc;

pub trait ArgumentTypeResolver: Send + Sync + Debug {
    /// Type the argument at `index` should have, if it can be derived.
    fn resolve(
        &self,
        args: &[ArgumentExpr],
        index: usize,
        ctx: &InferenceContext<'_>,
    ) -> Option<SqlType>;
}

pub trait ReturnTypeResolver: Send + Sync + Debug {
    fn resolve(
        &self,
        implied: Option<&SqlType>,
        args: &[ArgumentExpr],
        ctx: &InferenceContext<'_>,
    ) -> Option<SqlType>;
}

fn arg_type(args: &[ArgumentExpr], index: usize) -> Option<&SqlType> {
    args.get(index)
        .and_then(ArgumentExpr::ty)
        .filter(|ty| !ty.is_null())
}

/// Element type of the array argument at `array_index`.
#[derive(Debug, Clone, Copy)]
pub struct ElementViaArray {
    pub array_index: usize,
}

impl ArgumentTypeResolver for ElementViaArray {
    fn resolve(
        &self,
        args: &[ArgumentExpr],
        _: usize,
        _: &InferenceContext<'_>,
    ) -> Option<SqlType> {
        arg_type(args, self.array_index)
            .and_then(SqlType::as_plural)
            .map(|plural| SqlType::Basic(plural.element.clone()))
    }
}

/// Array of the element argument at `element_index`. An element argument
/// that is itself an array (deprecated overloads) yields that array type.
#[derive(Debug, Clone, Copy)]
pub struct ArrayViaElement {
    pub element_index: usize,
}

impl ArgumentTypeResolver for ArrayViaElement {
    fn resolve(
        &self,
        args: &[ArgumentExpr],
        _: usize,
        _: &InferenceContext<'_>,
    ) -> Option<SqlType> {
        match arg_type(args, self.element_index)? {
            plural @ SqlType::Plural(_) => Some(plural.clone()),
            basic => resolve_array_type(basic, CollectionKind::Array),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SameAsArgument {
    pub index: usize,
}

impl ArgumentTypeResolver for SameAsArgument {
    fn resolve(
        &self,
        args: &[ArgumentExpr],
        _: usize,
        _: &InferenceContext<'_>,
    ) -> Option<SqlType> {
        arg_type(args, self.index).cloned()
    }
}

/// First resolved argument other than the one being inferred.
#[derive(Debug, Clone, Copy)]
pub struct SameAsSibling;

impl ArgumentTypeResolver for SameAsSibling {
    fn resolve(
        &self,
        args: &[ArgumentExpr],
        index: usize,
        _: &InferenceContext<'_>,
    ) -> Option<SqlType> {
        (0..args.len())
            .filter(|&i| i != index)
            .find_map(|i| arg_type(args, i))
            .cloned()
    }
}

#[derive(Debug, Clone)]
pub struct InvariantArgument(pub SqlType);

impl ArgumentTypeResolver for InvariantArgument {
    fn resolve(&self, _: &[ArgumentExpr], _: usize, _: &InferenceContext<'_>) -> Option<SqlType> {
        Some(self.0.clone())
    }
}

/// Resolvers by argument position, with an optional one for all remaining
/// positions.
///
/// Arguments that already carry a type are left alone.
#[derive(Debug, Clone, Default)]
pub struct ArgumentTypes {
    by_index: Vec<Option<Arc<dyn ArgumentTypeResolver>>>,
    rest: Option<Arc<dyn ArgumentTypeResolver>>,
}

impl ArgumentTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at<R: ArgumentTypeResolver + 'static>(mut self, index: usize, resolver: R) -> Self {
        if self.by_index.len() <= index {
            self.by_index.resize(index + 1, None);
        }
        self.by_index[index] = Some(Arc::new(resolver));
        self
    }

    pub fn rest<R: ArgumentTypeResolver + 'static>(mut self, resolver: R) -> Self {
        self.rest = Some(Arc::new(resolver));
        self
    }
}

impl ArgumentTypeResolver for ArgumentTypes {
    fn resolve(&self, args: &[ArgumentExpr], index: usize, ctx: &InferenceContext<'_>)
        -> Option<SqlType> {
        if arg_type(args, index).is_some() {
            return None;
        }
        let resolver = self
            .by_index
            .get(index)
            .and_then(Option::as_ref)
            .or(self.rest.as_ref())?;
        resolver.resolve(args, index, ctx)
    }
}

/// Type from the surrounding expression or the caller, if `accept` allows it.
fn contextual(
    implied: Option<&SqlType>,
    ctx: &InferenceContext<'_>,
    accept: impl Fn(&SqlType) -> bool,
) -> Option<SqlType> {
    ctx.inferred_type
        .as_ref()
        .filter(|ty| accept(ty))
        .or(implied.filter(|ty| accept(ty)))
        .cloned()
}

#[derive(Debug, Clone)]
pub struct InvariantReturnType(pub SqlType);

impl ReturnTypeResolver for InvariantReturnType {
    fn resolve(&self, _: Option<&SqlType>, _: &[ArgumentExpr], _: &InferenceContext<'_>)
        -> Option<SqlType> {
        Some(self.0.clone())
    }
}

/// Array of an element argument. `element_index` of `None` uses the first
/// resolved argument, as for the array constructor.
#[derive(Debug, Clone, Copy)]
pub struct ArrayViaElementReturnType {
    pub element_index: Option<usize>,
    pub collection: CollectionKind,
}

impl ReturnTypeResolver for ArrayViaElementReturnType {
    fn resolve(
        &self,
        implied: Option<&SqlType>,
        args: &[ArgumentExpr],
        ctx: &InferenceContext<'_>,
    ) -> Option<SqlType> {
        if let Some(ty) = contextual(implied, ctx, SqlType::is_plural) {
            return Some(ty);
        }
        if ctx.in_type_inference {
            return None;
        }
        let element = match self.element_index {
            Some(index) => arg_type(args, index),
            None => (0..args.len()).find_map(|i| arg_type(args, i)),
        }?;
        resolve_array_type(element, self.collection)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ElementViaArrayReturnType {
    pub array_index: usize,
}

impl ReturnTypeResolver for ElementViaArrayReturnType {
    fn resolve(
        &self,
        implied: Option<&SqlType>,
        args: &[ArgumentExpr],
        ctx: &InferenceContext<'_>,
    ) -> Option<SqlType> {
        contextual(implied, ctx, |ty| !ty.is_plural()).or_else(|| {
            arg_type(args, self.array_index)
                .and_then(SqlType::as_plural)
                .map(|plural| SqlType::Basic(plural.element.clone()))
        })
    }
}

/// Type of an array argument. `index` of `None` uses the first resolved array argument.
#[derive(Debug, Clone, Copy)]
pub struct ArrayViaArgumentReturnType {
    pub index: Option<usize>,
}

impl ReturnTypeResolver for ArrayViaArgumentReturnType {
    fn resolve(
        &self,
        implied: Option<&SqlType>,
        args: &[ArgumentExpr],
        ctx: &InferenceContext<'_>,
    ) -> Option<SqlType> {
        contextual(implied, ctx, SqlType::is_plural).or_else(|| {
            let found = match self.index {
                Some(index) => arg_type(args, index).filter(|ty| ty.is_plural()),
                None => (0..args.len())
                    .find_map(|i| arg_type(args, i).filter(|ty| ty.is_plural())),
            };
            found.cloned()
        })
    }
}

/// JSON array of an element argument.
#[derive(Debug, Clone, Copy)]
pub struct JsonArrayViaElementReturnType {
    pub element_index: usize,
}

impl ReturnTypeResolver for JsonArrayViaElementReturnType {
    fn resolve(
        &self,
        implied: Option<&SqlType>,
        args: &[ArgumentExpr],
        ctx: &InferenceContext<'_>,
    ) -> Option<SqlType> {
        contextual(implied, ctx, SqlType::is_plural)
            .or_else(|| arg_type(args, self.element_index).and_then(json_array_variant))
    }
}
