/// Returns a terminal quoted the way it is written in grammar text
pub fn quote_terminal(c: char) -> String {
    match c {
        '\'' => "'\\''".to_string(),
        _ => format!("'{}'", c),
    }
}

/// Returns the number of decimal digits needed to print n
pub fn digit_width(n: usize) -> usize {
    (n.checked_ilog10().unwrap_or(0) + 1) as usize
}
