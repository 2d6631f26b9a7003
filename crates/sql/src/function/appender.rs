use super::parameters::{bind_markers, ParameterSlot};

/// Output buffer the renderers write SQL text into.
#[derive(Debug, Default, Clone)]
pub struct SqlAppender {
    buffer: String,
    parameters: Vec<ParameterSlot>,
}

impl SqlAppender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_sql(&mut self, sql: &str) -> &mut Self {
        self.buffer.push_str(sql);
        self
    }

    /// Appends renderer output, turning its parameter markers into `?` and
    /// recording the argument bound to each.
    pub fn append_rendered(&mut self, sql: &str) -> &mut Self {
        let (sql, slots) = bind_markers(sql);
        self.buffer.push_str(&sql);
        self.parameters.extend(slots);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn parameters(&self) -> &[ParameterSlot] {
        &self.parameters
    }

    pub fn into_parts(self) -> (String, Vec<ParameterSlot>) {
        (self.buffer, self.parameters)
    }
}
