use crate::{ErrorCode, ErrorContext, PluralError};

impl From<std::io::Error> for PluralError {
    fn from(err: std::io::Error) -> Self {
        PluralError::new(ErrorCode::Io, err.to_string())
    }
}

impl From<serde_json::Error> for PluralError {
    fn from(err: serde_json::Error) -> Self {
        PluralError::new(ErrorCode::SerializationFailed, err.to_string())
    }
}

impl From<serde_yaml::Error> for PluralError {
    fn from(err: serde_yaml::Error) -> Self {
        let mut error = PluralError::new(ErrorCode::InvalidYaml, err.to_string());
        if let Some(location) = err.location() {
            error = error.with_context(ErrorContext::Config {
                file_path: None,
                field: Some(format!("line {}, column {}", location.line(), location.column())),
            });
        }
        error
    }
}

/// Levenshtein-based "did you mean" lookup, used for unknown function names.
pub fn find_closest_match(target: &str, options: &[String]) -> Option<String> {
    let mut best_match: Option<&str> = None;
    let mut min_distance = usize::MAX;

    for option in options {
        let distance = levenshtein(target, option);
        if distance < min_distance && distance <= 3 {
            min_distance = distance;
            best_match = Some(option.as_str());
        }
    }

    best_match.map(|s| s.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut dp = vec![vec![0; b.len() + 1]; a.len() + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, val) in dp[0].iter_mut().enumerate() {
        *val = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = std::cmp::min(
                std::cmp::min(dp[i - 1][j] + 1, dp[i][j - 1] + 1),
                dp[i - 1][j - 1] + cost,
            );
        }
    }

    dp[a.len()][b.len()]
}
