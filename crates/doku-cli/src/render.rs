use doku_core::{Cursor, Grid};

/// Format a grid for the console: rows of space-separated integers, a
/// blank line between rows, and a trailing newline. Downstream tooling
/// parses this exact shape; keep it stable.
pub fn format_grid(grid: &Grid) -> String {
    let n = grid.size();
    let mut out = String::new();
    for pos in Cursor::new(n) {
        out.push_str(&grid.get(pos).to_string());
        if pos.col + 1 < n {
            out.push(' ');
        } else {
            out.push('\n');
            if pos.row + 1 < n {
                out.push('\n');
            }
        }
    }
    out
}

pub fn print_grid(grid: &Grid) {
    print!("{}", format_grid(grid));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_output_shape() {
        let grid = Grid::from_cells(vec![
            1, 2, 0, 0, //
            3, 4, 0, 0, //
            0, 0, 3, 4, //
            0, 0, 1, 2,
        ])
        .unwrap();
        assert_eq!(
            format_grid(&grid),
            "1 2 0 0\n\n3 4 0 0\n\n0 0 3 4\n\n0 0 1 2\n"
        );
    }

    #[test]
    fn test_double_digit_values_stay_space_separated() {
        let mut grid = Grid::empty(4);
        grid.set(doku_core::Position::new(0, 0), 16);
        let first_line = format_grid(&grid);
        let first_line = first_line.lines().next().unwrap();
        assert_eq!(first_line, "16 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0");
    }
}
