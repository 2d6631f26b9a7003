//! Null-safe comparison, i.e. a comparison where `null = null` holds.

/// Dialect capability for spelling null-safe (in)equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullSafeEquality {
    /// `IS [NOT] DISTINCT FROM`
    DistinctFrom,
    /// Oracle `decode`, which treats two nulls as equal
    Decode,
    /// Portable `CASE WHEN` emulation
    CaseWhen,
}

impl NullSafeEquality {
    pub fn equal(&self, left: &str, right: &str) -> String {
        match self {
            NullSafeEquality::DistinctFrom => format!("{} is not distinct from {}", left, right),
            NullSafeEquality::Decode => format!("decode({},{},0,1)=0", left, right),
            NullSafeEquality::CaseWhen => format!("{}=1", case_when(left, right)),
        }
    }

    pub fn not_equal(&self, left: &str, right: &str) -> String {
        match self {
            NullSafeEquality::DistinctFrom => format!("{} is distinct from {}", left, right),
            NullSafeEquality::Decode => format!("decode({},{},0,1)=1", left, right),
            NullSafeEquality::CaseWhen => format!("{}=0", case_when(left, right)),
        }
    }
}

fn case_when(left: &str, right: &str) -> String {
    format!(
        "case when {l}={r} or {l} is null and {r} is null then 1 else 0 end",
        l = left,
        r = right
    )
}

/// Plain or null-safe equality depending on the function variant.
pub(crate) fn equality(nullable: bool, style: NullSafeEquality, left: &str, right: &str) -> String {
    if nullable {
        style.equal(left, right)
    } else {
        format!("{}={}", left, right)
    }
}
