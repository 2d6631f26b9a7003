//! Registered function descriptors.

use super::appender::SqlAppender;
use super::argument::ArgumentExpr;
use super::context::{InferenceContext, RenderContext};
use super::ddl::{cast_target, collection_type_name};
use super::error::FunctionError;
use super::parameters::{marker, ParameterSlot};
use super::resolver::{ArgumentTypeResolver, ReturnTypeResolver};
use super::types::{PluralType, SqlType};
use super::validator::ArgumentsValidator;
use crate::array::build::{
    AggregateStrategy, ConcatElementStrategy, ConcatStrategy, ConstructorStrategy, FillStrategy,
};
use crate::array::edit::{RemoveIndexStrategy, RemoveStrategy, ReplaceStrategy, SetStrategy};
use crate::array::extract::{SliceStrategy, TrimStrategy};
use crate::array::predicate::PredicateStrategy;
use crate::array::search::{GetStrategy, LengthStrategy, PositionStrategy, PositionsStrategy};
use crate::array::sort::SortStrategy;
use crate::array::to_string::ToStringStrategy;
use crate::array;
use std::sync::Arc;

/// The dialect-specific SQL shape of a function.
#[derive(Debug, Clone, PartialEq)]
pub enum Renderer {
    Contains { strategy: PredicateStrategy, nullable: bool },
    Includes { strategy: PredicateStrategy, nullable: bool },
    Intersects { strategy: PredicateStrategy, nullable: bool },
    Position(PositionStrategy),
    Positions(PositionsStrategy),
    Get(GetStrategy),
    Length(LengthStrategy),
    Remove(RemoveStrategy),
    RemoveIndex(RemoveIndexStrategy),
    Replace(ReplaceStrategy),
    Set(SetStrategy),
    Slice(SliceStrategy),
    Trim(TrimStrategy),
    Sort(SortStrategy),
    ToString(ToStringStrategy),
    Concat(ConcatStrategy),
    ConcatElement { strategy: ConcatElementStrategy, prepend: bool },
    Constructor(ConstructorStrategy),
    Fill(FillStrategy),
    Aggregate(AggregateStrategy),
}

impl Renderer {
    fn render(
        &self,
        call: &RenderCall<'_>,
        ctx: &mut RenderContext<'_>,
    ) -> Result<String, FunctionError> {
        match self {
            Renderer::Contains { strategy, nullable } => {
                array::predicate::render_contains(strategy, *nullable, call, ctx)
            }
            Renderer::Includes { strategy, nullable } => {
                array::predicate::render_includes(strategy, *nullable, call, ctx)
            }
            Renderer::Intersects { strategy, nullable } => {
                array::predicate::render_intersects(strategy, *nullable, call, ctx)
            }
            Renderer::Position(strategy) => array::search::render_position(strategy, call, ctx),
            Renderer::Positions(strategy) => array::search::render_positions(strategy, call, ctx),
            Renderer::Get(strategy) => array::search::render_get(strategy, call),
            Renderer::Length(strategy) => array::search::render_length(strategy, call),
            Renderer::Remove(strategy) => array::edit::render_remove(strategy, call, ctx),
            Renderer::RemoveIndex(strategy) => {
                array::edit::render_remove_index(strategy, call, ctx)
            }
            Renderer::Replace(strategy) => array::edit::render_replace(strategy, call, ctx),
            Renderer::Set(strategy) => array::edit::render_set(strategy, call, ctx),
            Renderer::Slice(strategy) => array::extract::render_slice(strategy, call),
            Renderer::Trim(strategy) => array::extract::render_trim(strategy, call, ctx),
            Renderer::Sort(strategy) => array::sort::render_sort(strategy, call),
            Renderer::ToString(strategy) => array::to_string::render_to_string(strategy, call, ctx),
            Renderer::Concat(strategy) => array::build::render_concat(strategy, call),
            Renderer::ConcatElement { strategy, prepend } => {
                array::build::render_concat_element(strategy, *prepend, call, ctx)
            }
            Renderer::Constructor(strategy) => {
                array::build::render_constructor(strategy, call, ctx)
            }
            Renderer::Fill(strategy) => array::build::render_fill(strategy, call, ctx),
            Renderer::Aggregate(strategy) => array::build::render_aggregate(strategy, call),
        }
    }
}

/// One call being rendered.
#[derive(Debug, Clone, Copy)]
pub struct RenderCall<'a> {
    pub function: &'a str,
    pub args: &'a [ArgumentExpr],
    pub return_type: Option<&'a SqlType>,
}

impl<'a> RenderCall<'a> {
    pub fn new(
        function: &'a str,
        args: &'a [ArgumentExpr],
        return_type: Option<&'a SqlType>,
    ) -> Self {
        Self {
            function,
            args,
            return_type,
        }
    }

    pub fn arg(&self, index: usize) -> Result<&'a ArgumentExpr, FunctionError> {
        self.args.get(index).ok_or_else(|| {
            FunctionError::arity(
                self.function,
                format!("Function {}() is missing argument {}", self.function, index),
            )
        })
    }

    /// SQL of an argument. Parameters are written as markers that the
    /// descriptor binds to this argument once rendering is done.
    pub fn sql(&self, index: usize) -> Result<String, FunctionError> {
        self.arg(index)?
            .to_sql_with(&mut |ordinal| marker(index, ordinal))
    }

    pub fn operand(&self, index: usize) -> Result<String, FunctionError> {
        Ok(self.arg(index)?.operand(self.sql(index)?))
    }

    pub fn optional_sql(&self, index: usize) -> Result<Option<String>, FunctionError> {
        if index < self.args.len() {
            self.sql(index).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn plural(&self, index: usize) -> Option<&'a PluralType> {
        self.args
            .get(index)
            .and_then(ArgumentExpr::ty)
            .and_then(SqlType::as_plural)
    }

    /// Array type of the call: the first array argument, else the return type.
    pub fn array_type(&self) -> Option<&'a SqlType> {
        self.args
            .iter()
            .filter_map(ArgumentExpr::ty)
            .find(|ty| ty.is_plural())
            .or(self.return_type.filter(|ty| ty.is_plural()))
    }

    /// Renders an argument, casting it to `ty` when it has no type on its own.
    pub fn typed_sql(
        &self,
        index: usize,
        ty: Option<&SqlType>,
        ctx: &RenderContext<'_>,
    ) -> Result<String, FunctionError> {
        let arg = self.arg(index)?;
        let sql = self.sql(index)?;
        match ty {
            Some(ty) if arg.is_untyped() => {
                Ok(format!("cast({} as {})", sql, cast_target(ctx.types, ty)?))
            }
            _ => Ok(sql),
        }
    }

    /// Element type of the array argument at `index`.
    pub fn element_of(&self, index: usize) -> Option<SqlType> {
        self.plural(index)
            .or_else(|| self.array_type().and_then(SqlType::as_plural))
            .map(|plural| SqlType::Basic(plural.element.clone()))
    }

    /// Oracle collection type of the argument at `index`, falling back to the return type.
    pub fn collection_type(&self, index: usize) -> Result<String, FunctionError> {
        let ty = self.args.get(index).and_then(ArgumentExpr::ty).filter(|ty| ty.is_plural());
        collection_type_name(self.function, ty.or(self.return_type))
    }

    pub fn return_collection_type(&self) -> Result<String, FunctionError> {
        collection_type_name(self.function, self.return_type)
    }

    /// DDL of the call's return type, required by renderers that cast empty arrays.
    pub fn return_cast_target(&self, ctx: &RenderContext<'_>) -> Result<String, FunctionError> {
        let ty = self.return_type.or(self.array_type()).ok_or_else(|| {
            FunctionError::semantic(self.function, "could not determine the array type of the call")
        })?;
        cast_target(ctx.types, ty)
    }

    pub fn unsupported(
        &self,
        ctx: &RenderContext<'_>,
        message: impl Into<String>,
    ) -> FunctionError {
        FunctionError::unsupported(self.function, ctx.dialect.name(), message)
    }
}

/// Rendered SQL of a call with its resolved type.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCall {
    pub sql: String,
    pub return_type: Option<SqlType>,
    /// The argument bound to each `?` of `sql`, in order. An argument
    /// appears once per placeholder it was rendered into.
    pub parameters: Vec<ParameterSlot>,
}

#[derive(Debug, Clone)]
pub struct FunctionDescriptor {
    name: String,
    signature: &'static str,
    validator: Arc<dyn ArgumentsValidator>,
    argument_types: Arc<dyn ArgumentTypeResolver>,
    return_type: Arc<dyn ReturnTypeResolver>,
    renderer: Renderer,
}

impl FunctionDescriptor {
    pub fn new(
        name: impl Into<String>,
        signature: &'static str,
        validator: impl ArgumentsValidator + 'static,
        argument_types: impl ArgumentTypeResolver + 'static,
        return_type: impl ReturnTypeResolver + 'static,
        renderer: Renderer,
    ) -> Self {
        Self {
            name: name.into(),
            signature,
            validator: Arc::new(validator),
            argument_types: Arc::new(argument_types),
            return_type: Arc::new(return_type),
            renderer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &'static str {
        self.signature
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Same function registered under another name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn validate(&self, args: &[ArgumentExpr]) -> Result<(), FunctionError> {
        self.validator.validate(args, &self.name)
    }

    pub fn resolve_argument_type(
        &self,
        args: &[ArgumentExpr],
        index: usize,
        ctx: &InferenceContext<'_>,
    ) -> Option<SqlType> {
        self.argument_types.resolve(args, index, ctx)
    }

    pub fn resolve_return_type(
        &self,
        implied: Option<&SqlType>,
        args: &[ArgumentExpr],
        ctx: &InferenceContext<'_>,
    ) -> Option<SqlType> {
        self.return_type.resolve(implied, args, ctx)
    }

    pub fn render(
        &self,
        args: &[ArgumentExpr],
        return_type: Option<&SqlType>,
        ctx: &mut RenderContext<'_>,
        out: &mut SqlAppender,
    ) -> Result<(), FunctionError> {
        let call = RenderCall::new(&self.name, args, return_type);
        let sql = self.renderer.render(&call, ctx)?;
        tracing::trace!(
            function = %self.name,
            dialect = %ctx.dialect,
            sql = %sql,
            "Rendered function"
        );
        out.append_rendered(&sql);
        Ok(())
    }

    /// Validates, infers argument and return types, then renders.
    pub fn render_call(
        &self,
        args: &[ArgumentExpr],
        implied: Option<&SqlType>,
        ctx: &mut RenderContext<'_>,
    ) -> Result<RenderedCall, FunctionError> {
        self.validate(args)?;

        let inference = ctx.inference();
        let typed: Vec<ArgumentExpr> = args
            .iter()
            .enumerate()
            .map(|(index, arg)| match self.resolve_argument_type(args, index, &inference) {
                Some(ty) => arg.clone().with_type(ty),
                None => arg.clone(),
            })
            .collect();
        let return_type = self.resolve_return_type(implied, &typed, &inference);

        let mut out = SqlAppender::new();
        self.render(&typed, return_type.as_ref(), ctx, &mut out)?;
        let (sql, parameters) = out.into_parts();
        Ok(RenderedCall {
            sql,
            return_type,
            parameters,
        })
    }
}
