use super::diagnostics::{CallSite, Diagnostics};
use super::types::SqlType;
use crate::dialects::{Dialect, TypeMapper};
use plural_common::config::ArrayFunctionSettings;

/// State visible to type resolution.
pub struct InferenceContext<'a> {
    pub types: &'a dyn TypeMapper,
    /// Type expected by the surrounding expression, e.g. the other side of an assignment
    pub inferred_type: Option<SqlType>,
    /// Set while the caller only infers types for checking purposes
    pub in_type_inference: bool,
}

impl<'a> InferenceContext<'a> {
    pub fn new(types: &'a dyn TypeMapper) -> Self {
        Self {
            types,
            inferred_type: None,
            in_type_inference: false,
        }
    }

    pub fn with_inferred_type(mut self, ty: SqlType) -> Self {
        self.inferred_type = Some(ty);
        self
    }

    pub fn in_type_inference(mut self) -> Self {
        self.in_type_inference = true;
        self
    }
}

/// State visible to a renderer for one call.
pub struct RenderContext<'a> {
    pub dialect: Dialect,
    pub types: &'a dyn TypeMapper,
    pub diagnostics: &'a mut Diagnostics,
    pub call_site: Option<CallSite>,
    pub settings: ArrayFunctionSettings,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        dialect: Dialect,
        types: &'a dyn TypeMapper,
        diagnostics: &'a mut Diagnostics,
    ) -> Self {
        Self {
            dialect,
            types,
            diagnostics,
            call_site: None,
            settings: ArrayFunctionSettings::default(),
        }
    }

    pub fn at(mut self, call_site: CallSite) -> Self {
        self.call_site = Some(call_site);
        self
    }

    pub fn with_settings(mut self, settings: ArrayFunctionSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn inference(&self) -> InferenceContext<'a> {
        InferenceContext::new(self.types)
    }

    pub fn deprecation(&mut self, function: &str, message: &str) -> bool {
        if !self.settings.warn_on_deprecated_overloads {
            return false;
        }
        self.diagnostics
            .deprecation(self.call_site.as_ref(), function, message)
    }
}
