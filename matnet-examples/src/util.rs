/// Flattens a textual pixel grid into an input vector with a constant
/// bias cell of 1.0 appended. `#` cells become 1.0, everything else 0.0.
pub fn pattern_with_bias(rows: &[&str]) -> Vec<f64> {
    let mut cells: Vec<f64> = rows
        .iter()
        .flat_map(|row| row.chars())
        .map(|c| if c == '#' { 1.0 } else { 0.0 })
        .collect();
    cells.push(1.0);
    cells
}
