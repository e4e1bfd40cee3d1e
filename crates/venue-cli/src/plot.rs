use venue_core::map::ScatterDot;

/// Draws fallback scatter dots on a character grid with a border.
///
/// Dots are `o`, the selected venue is `@`, and cells shared by several
/// venues show `8`.
pub fn ascii_scatter(
    dots: &[ScatterDot<'_>],
    selected: Option<&str>,
    width: usize,
    height: usize,
) -> Vec<String> {
    let (width, height) = (width.max(2), height.max(2));
    let mut grid = vec![vec![' '; width]; height];

    for dot in dots {
        let col = cell(dot.x, width);
        let row = cell(dot.y, height);
        let is_selected = selected == Some(dot.venue.id.as_str());
        let slot = &mut grid[row][col];
        *slot = match (*slot, is_selected) {
            (_, true) | ('@', _) => '@',
            (' ', false) => 'o',
            _ => '8',
        };
    }

    let border = format!("+{}+", "-".repeat(width));
    let mut lines = Vec::with_capacity(height + 2);
    lines.push(border.clone());
    lines.extend(grid.into_iter().map(|row| format!("|{}|", row.into_iter().collect::<String>())));
    lines.push(border);
    lines
}

fn cell(unit: f64, size: usize) -> usize {
    let idx = (unit.clamp(0.0, 1.0) * (size - 1) as f64).round() as usize;
    idx.min(size - 1)
}
