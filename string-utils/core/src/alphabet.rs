// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Upper and lower case basic ASCII letters, `A`..=`Z` then `a`..=`z`.
pub const ASCII_CHARS: [u8; 52] = build_ascii_chars();

const fn build_ascii_chars() -> [u8; 52] {
    let mut chars = [0u8; 52];
    let mut c = b'A';
    let mut i = 0;
    while i < chars.len() {
        chars[i] = c;
        // skip brackets, carets and such
        c = if c == b'Z' { b'a' } else { c + 1 };
        i += 1;
    }
    chars
}
