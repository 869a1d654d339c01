#![cfg(test)]
//! Shared helpers for unit tests.
use rand::{Rng, SeedableRng, rngs::StdRng};

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

/// Fragments that exercise every scanner rule, including the unterminated
/// and multi-byte cases.
const FRAGMENTS: &[&str] = &[
    "SELECT", "select", "FROM", "where", "JOIN", "left outer join", "ON", "and", "OR", "ORDER BY",
    "group  by", "UNION ALL", "INSERT INTO", "VALUES", "set", "DELETE FROM", "cross apply",
    "LIMIT", "TOP", "COUNT", "OVER", "LIKE", "GETDATE", "DATEADD", "a", "t.x", "_id", "[", "]",
    "[Data Ext]", "'", "''", "'it''s'", "'%x'", "--", "-- c\n", "/*", "*/", "/* c */", "(", ")",
    ",", ".", ";", "*", "<>", "!=", ">=", "=", "+", "||", "12", "3.5", "4.", "<", ">", "&", " ",
    "  ", "\n", "\t", "\r\n", "é", "日本", "🦀", "$", "#", "@", "`", "\"",
];

/// `count` random SQL-ish strings built from `FRAGMENTS`, reproducible for
/// a given `seed`.
pub(crate) fn random_sql(seed: u64, count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.random_range(0..24);
            (0..len)
                .map(|_| FRAGMENTS[rng.random_range(0..FRAGMENTS.len())])
                .collect()
        })
        .collect()
}
