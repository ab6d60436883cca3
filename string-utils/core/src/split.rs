// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Split `s` on every occurrence of `separator` without a pattern engine.
///
/// Always returns `occurrences + 1` elements: empty segments are kept, and
/// an input without the separator comes back as a single element. Joining
/// the result with `separator` reconstructs `s`.
pub fn split_on(s: &str, separator: char) -> Vec<&str> {
    let num_substrings = 1 + s.chars().filter(|&x| x == separator).count();
    let mut result = Vec::with_capacity(num_substrings);

    let mut start = 0;
    for (pos, x) in s.char_indices() {
        if x == separator {
            result.push(&s[start..pos]);
            start = pos + x.len_utf8();
        }
    }
    result.push(&s[start..]);
    result
}
