use crate::{Board, BoundingBox, Rack};

/// Renders the board as a grid with the x coordinates on top and the y
/// coordinates on the left. Empty cells are drawn as `--`.
pub fn render_board(board: &Board) -> String {
    let BoundingBox {
        x_min,
        y_min,
        x_max,
        y_max,
    } = board.bbox();

    let mut result = String::from("    ");
    for x in x_min..x_max {
        result += &format!(" {:>3}", x);
    }
    if board.is_empty() {
        result += "(empty board)";
    }

    for y in y_min..y_max {
        result += &format!("\n{:>3}:", y);
        for x in x_min..x_max {
            match board.get(x, y) {
                Some(tile) => result += &format!("  {} ", tile),
                None => result += "  --",
            }
        }
    }
    result
}

/// Renders the tiles on the rack, with their indices on a second line.
pub fn render_rack(rack: &Rack) -> String {
    let mut result = String::new();
    for tile in rack.tiles() {
        result += &format!(" {} ", tile);
    }
    result += "\n";
    for idx in 0..rack.len() {
        result += &format!("{:>2} ", idx);
    }
    result
}
