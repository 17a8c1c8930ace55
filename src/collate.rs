//! Turkish-aware string collation.
//!
//! SQLite's built-in collations order ç/ğ/ı/i/ö/ş/ü by code point, which
//! scatters them across the alphabet. Names are therefore sorted in process
//! using an alphabet-rank key.

/// Turkish alphabet in collation order.
const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'ç', 'd', 'e', 'f', 'g', 'ğ', 'h', 'ı', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'ö', 'p', 'r', 's', 'ş', 't', 'u', 'ü', 'v', 'y', 'z',
];

/// Lowercase with the Turkish dotted/dotless-i rules: 'I' maps to 'ı' and
/// 'İ' to 'i', unlike Unicode default casing.
fn lowercase_tr(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Collation key for a string. Letters of the Turkish alphabet rank by their
/// alphabet position; any other character ranks after them by code point, so
/// mixed input still orders deterministically.
pub fn sort_key(s: &str) -> Vec<(u8, u32)> {
    s.chars()
        .map(lowercase_tr)
        .map(|c| match ALPHABET.iter().position(|&a| a == c) {
            Some(pos) => (0u8, pos as u32),
            None => (1u8, c as u32),
        })
        .collect()
}

/// Compare two strings under Turkish collation, case-insensitively.
pub fn compare(a: &str, b: &str) -> std::cmp::Ordering {
    sort_key(a).cmp(&sort_key(b))
}
