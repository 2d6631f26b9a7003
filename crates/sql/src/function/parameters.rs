//! Bind parameters of rendered calls.
//!
//! Emulations may repeat an argument, e.g. once in a null guard and once in
//! the body, so one parameter argument can produce several `?` placeholders.
//! Renderers write a marker per placeholder that names the argument it came
//! from; `bind_markers` turns the markers back into `?` and records which
//! argument supplies each placeholder.

pub const PLACEHOLDER: &str = "?";

const MARKER: char = '\u{1}';

/// One `?` of the rendered SQL, in order of appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterSlot {
    /// Index of the call argument supplying the value
    pub argument: usize,
    /// Ordinal of the parameter within that argument. Only aggregates carry
    /// more than one.
    pub ordinal: usize,
}

impl ParameterSlot {
    pub fn new(argument: usize, ordinal: usize) -> Self {
        Self { argument, ordinal }
    }
}

pub(crate) fn marker(argument: usize, ordinal: usize) -> String {
    format!("{MARKER}{argument}.{ordinal}{MARKER}")
}

fn parse_marker(text: &str) -> Option<ParameterSlot> {
    let (argument, ordinal) = text.split_once('.')?;
    Some(ParameterSlot::new(argument.parse().ok()?, ordinal.parse().ok()?))
}

/// Replaces parameter markers with `?` and returns the slot of every
/// placeholder. Quoted literals and identifiers are copied unchanged.
pub(crate) fn bind_markers(sql: &str) -> (String, Vec<ParameterSlot>) {
    let mut out = String::with_capacity(sql.len());
    let mut slots = Vec::new();
    let mut quote: Option<char> = None;
    let mut chars = sql.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(open), c) if c == open => {
                quote = None;
                out.push(c);
            }
            (Some(_), c) => out.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                out.push(c);
            }
            (None, MARKER) => {
                let text: String = chars.by_ref().take_while(|c| *c != MARKER).collect();
                match parse_marker(&text) {
                    Some(slot) => {
                        slots.push(slot);
                        out.push_str(PLACEHOLDER);
                    }
                    None => {
                        out.push(MARKER);
                        out.push_str(&text);
                        out.push(MARKER);
                    }
                }
            }
            (None, c) => out.push(c),
        }
    }
    (out, slots)
}
