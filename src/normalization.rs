/// Reduces raw input to its compact token: digits plus the check letter, without
/// separators and without the zeros leading the (trimmed) input.
///
/// Only zeros at the very start are dropped. Zeros following a noise character
/// (`-0012-3` gives `00123`) are kept.
pub fn clean_rut_string(rut: Option<&str>) -> String {
    let Some(rut) = rut else {
        return String::new();
    };
    rut.trim()
        .to_lowercase()
        .trim_start_matches('0')
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'k')
        .collect()
}
