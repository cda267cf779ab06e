use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Rect of `width` x `height` centred in `area`, clamped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Splits the top of `area` into `rows` rows of `columns` cells, each
/// `cell_height` tall. Rows running past the bottom are clipped.
pub fn grid_cells(area: Rect, columns: usize, cell_height: u16, rows: usize) -> Vec<Vec<Rect>> {
    let columns = columns.max(1);
    let constraints: Vec<Constraint> = (0..columns)
        .map(|_| Constraint::Ratio(1, columns as u32))
        .collect();

    (0..rows)
        .map(|row| {
            let y = area.y + (row as u16) * cell_height;
            let row_area = Rect {
                x: area.x,
                y,
                width: area.width,
                height: cell_height.min(area.bottom().saturating_sub(y)),
            };
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints.clone())
                .split(row_area)
                .to_vec()
        })
        .collect()
}

/// How many rows of `cell_height` fit in `area`.
pub fn visible_rows(area: Rect, cell_height: u16) -> usize {
    (area.height / cell_height.max(1)) as usize
}

/// First row to draw so that `focused_row` stays visible.
pub fn scroll_offset(focused_row: usize, visible: usize) -> usize {
    focused_row.saturating_sub(visible.saturating_sub(1))
}
