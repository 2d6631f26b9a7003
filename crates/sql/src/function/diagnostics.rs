//! Compile-time warnings raised while rendering.
//!
//! The caller owns one `Diagnostics` per compilation (or longer) and decides
//! how long the "already warned" memory lives.

use std::collections::HashSet;
use std::fmt;

/// Identifies where a function call appears, e.g. `query-12:3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite(String);

impl CallSite {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether deprecations are reported at all is decided by
/// `ArrayFunctionSettings::warn_on_deprecated_overloads`, checked by the
/// render context.
#[derive(Debug, Default)]
pub struct Diagnostics {
    seen: HashSet<(Option<CallSite>, String)>,
    warnings: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a deprecated overload use. Warns at most once per call site and
    /// function; returns whether a warning was emitted.
    pub fn deprecation(
        &mut self,
        call_site: Option<&CallSite>,
        function: &str,
        message: &str,
    ) -> bool {
        if !self.seen.insert((call_site.cloned(), function.to_string())) {
            return false;
        }

        let location = call_site
            .map(ToString::to_string)
            .unwrap_or_else(|| "<unknown>".to_string());
        tracing::warn!(
            target: "plural_sql::deprecation",
            function = %function,
            call_site = %location,
            "{}",
            message
        );
        self.warnings
            .push(format!("{} ({} at {})", message, function, location));
        true
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
