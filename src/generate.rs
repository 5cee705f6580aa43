//! Pattern construction for obgen.
//!
//! This module builds the a^n b^n c^n test-input strings and resolves the
//! repetition count from the raw positional argument. Count resolution is
//! deliberately forgiving: anything that does not parse as an integer falls
//! back to [`DEFAULT_COUNT`] so the tool never fails on bad input.

/// Repetition count used when the argument is absent or unparsable.
pub const DEFAULT_COUNT: usize = 1000;

/// Resolve the repetition count from the raw positional argument.
///
/// Rules:
/// - `None` resolves to [`DEFAULT_COUNT`].
/// - A value that parses as a non-negative integer is used as-is.
/// - A value that parses as a negative integer clamps to 0 repetitions.
/// - Anything else (non-numeric, fractional text, out of range) silently
///   resolves to [`DEFAULT_COUNT`].
pub fn resolve_count(arg: Option<&str>) -> usize {
    match arg {
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(n) if n < 0 => 0,
            Ok(n) => n as usize,
            Err(_) => DEFAULT_COUNT,
        },
        None => DEFAULT_COUNT,
    }
}

/// Build the test-input string: `a_count` copies of 'a', then `b_count`
/// copies of 'b', then `c_count` copies of 'c'.
pub fn pattern(a_count: usize, b_count: usize, c_count: usize) -> String {
    let mut out = String::with_capacity(a_count + b_count + c_count);
    out.extend(std::iter::repeat('a').take(a_count));
    out.extend(std::iter::repeat('b').take(b_count));
    out.extend(std::iter::repeat('c').take(c_count));
    out
}
