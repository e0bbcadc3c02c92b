//! Column-major grid layout for the default listing.

use std::path::Path;

use crate::domain::file_card::FileCard;
use crate::domain::format::{bold, display_width, green};

/// Columns reserved for an emoji regardless of its actual glyph width.
pub const EMOJI_WIDTH: usize = 2;
pub const EMOJI_NAME_SPACING: usize = 1;
/// Gap between grid columns.
pub const COLUMN_SPACING: usize = 2;
/// Width of a `(X)` git marker.
pub const STATUS_WIDTH: usize = 3;

/// Computed grid geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub columns: usize,
    pub rows: usize,
    pub column_widths: Vec<usize>,
}

/// Terminal columns taken by one rendered card.
pub fn card_width(card: &FileCard) -> usize {
    let status = if card.git_status.is_some() { STATUS_WIDTH } else { 0 };
    EMOJI_WIDTH + EMOJI_NAME_SPACING + display_width(&card.name) + status
}

/// Fit `cards` into at most `max_columns` columns of a `term_width` terminal.
pub fn plan(cards: &[FileCard], term_width: usize, max_columns: usize) -> Grid {
    if cards.is_empty() {
        return Grid { columns: 0, rows: 0, column_widths: Vec::new() };
    }

    let widths: Vec<usize> = cards.iter().map(card_width).collect();
    let widest = widths.iter().copied().max().unwrap_or(0);

    let columns = ((term_width + COLUMN_SPACING) / (widest + COLUMN_SPACING))
        .min(max_columns)
        .min(cards.len())
        .max(1);
    let rows = cards.len().div_ceil(columns);

    let mut column_widths = vec![0; columns];
    for (index, width) in widths.iter().enumerate() {
        let column = index / rows;
        column_widths[column] = column_widths[column].max(*width);
    }

    Grid { columns, rows, column_widths }
}

/// Render the grid row by row. A cell is padded to its column width plus
/// spacing only when another cell follows it in the row, so a short last row
/// ends without trailing whitespace.
pub fn render(cards: &[FileCard], grid: &Grid) -> Vec<String> {
    let mut lines = Vec::with_capacity(grid.rows);

    for row in 0..grid.rows {
        let mut line = String::new();
        for column in 0..grid.columns {
            let index = column * grid.rows + row;
            let Some(card) = cards.get(index) else {
                continue;
            };

            line.push_str(&card.emoji);
            line.push(' ');
            line.push_str(&card.name);
            if let Some(status) = card.git_status {
                line.push('(');
                line.push_str(&green(&status.to_string()));
                line.push(')');
            }

            let is_last = column + 1 == grid.columns || cards.get(index + grid.rows).is_none();
            if !is_last {
                let fill = grid.column_widths[column] - card_width(card) + COLUMN_SPACING;
                line.push_str(&" ".repeat(fill));
            }
        }
        lines.push(line);
    }

    lines
}

/// Bold directory path, with the git branch in green when known.
pub fn header(path: &Path, branch: Option<&str>) -> String {
    let path = bold(&path.display().to_string());
    match branch {
        Some(branch) => format!("{} ({})", path, green(branch)),
        None => path,
    }
}
