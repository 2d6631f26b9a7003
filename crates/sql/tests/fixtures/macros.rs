/// Renders `$function` for `$dialect` and compares with the expected SQL.
macro_rules! assert_sql {
    ($dialect:expr, $function:expr, [$($arg:expr),* $(,)?], $expected:expr) => {{
        let sql = crate::common::render($dialect, $function, &[$($arg),*])
            .unwrap_or_else(|e| panic!("rendering {} failed: {}", $function, e));
        println!("{} {}: {}", $dialect, $function, sql);
        assert_eq!(sql, $expected);
    }};
}

/// Rendering must fail with an error matching `$pattern`.
macro_rules! assert_render_err {
    ($dialect:expr, $function:expr, [$($arg:expr),* $(,)?], $pattern:pat) => {{
        let result = crate::common::render($dialect, $function, &[$($arg),*]);
        match result {
            Err($pattern) => {}
            other => panic!("expected error for {}, got {:?}", $function, other),
        }
    }};
}
