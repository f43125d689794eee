use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayerParseError {
    #[error("row {row}, column {col}: invalid tile id {value:?}")]
    BadCell {
        row: usize,
        col: usize,
        value: String,
    },
}

/// Row-major grid of optional tile ids parsed from CSV text. An empty
/// field is an empty cell; rows may be ragged.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    rows: Vec<Vec<Option<u16>>>,
}

impl TileLayer {
    pub fn parse(text: &str) -> Result<Self, LayerParseError> {
        let mut rows = Vec::new();
        for (row, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                rows.push(Vec::new());
                continue;
            }
            let mut cells = Vec::new();
            for (col, field) in line.split(',').enumerate() {
                let field = field.trim();
                if field.is_empty() {
                    cells.push(None);
                    continue;
                }
                let id = field.parse::<u16>().map_err(|_| LayerParseError::BadCell {
                    row,
                    col,
                    value: field.to_string(),
                })?;
                cells.push(Some(id));
            }
            rows.push(cells);
        }
        Ok(Self { rows })
    }

    /// Cell at (col, row). `None` for empty cells and for anything outside
    /// the grid, including past the end of a short row.
    pub fn get(&self, col: usize, row: usize) -> Option<u16> {
        self.rows.get(row)?.get(col).copied().flatten()
    }

    /// Widest row, in cells.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn pixel_width(&self, tile_size: f32) -> f32 {
        self.width() as f32 * tile_size
    }

    /// Iterate non-empty cells as `(col, row, id)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u16)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, id)| id.map(|id| (col, row, id)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grid_with_empty_cells() {
        let layer = TileLayer::parse("1,,2\n,3,\n4,5,6").unwrap();
        assert_eq!(layer.width(), 3);
        assert_eq!(layer.height(), 3);
        assert_eq!(layer.get(0, 0), Some(1));
        assert_eq!(layer.get(1, 0), None);
        assert_eq!(layer.get(1, 1), Some(3));
        assert_eq!(layer.get(2, 2), Some(6));
    }

    #[test]
    fn zero_is_a_real_tile_id() {
        let layer = TileLayer::parse("0,").unwrap();
        assert_eq!(layer.get(0, 0), Some(0));
        assert_eq!(layer.get(1, 0), None);
    }

    #[test]
    fn ragged_rows_are_accepted() {
        let layer = TileLayer::parse("1,2,3,4\n5,6").unwrap();
        assert_eq!(layer.width(), 4);
        assert_eq!(layer.get(1, 1), Some(6));
        assert_eq!(layer.get(2, 1), None, "past the end of a short row");
    }

    #[test]
    fn out_of_bounds_is_empty() {
        let layer = TileLayer::parse("1,2").unwrap();
        assert_eq!(layer.get(0, 5), None);
        assert_eq!(layer.get(5, 0), None);
    }

    #[test]
    fn bad_cell_reports_position() {
        let err = TileLayer::parse("1,2\n3,x,5").unwrap_err();
        let LayerParseError::BadCell { row, col, value } = err;
        assert_eq!((row, col), (1, 1));
        assert_eq!(value, "x");
    }

    #[test]
    fn crlf_and_padding_are_tolerated() {
        let layer = TileLayer::parse("1, 2 ,3\r\n4,,\r\n").unwrap();
        assert_eq!(layer.height(), 2);
        assert_eq!(layer.get(1, 0), Some(2));
        assert_eq!(layer.get(0, 1), Some(4));
    }

    #[test]
    fn cells_iterates_non_empty_in_row_major_order() {
        let layer = TileLayer::parse(",7\n8,").unwrap();
        let cells: Vec<_> = layer.cells().collect();
        assert_eq!(cells, vec![(1, 0, 7), (0, 1, 8)]);
    }

    #[test]
    fn pixel_width_uses_widest_row() {
        let layer = TileLayer::parse("1,2,3\n4").unwrap();
        assert_eq!(layer.pixel_width(32.0), 96.0);
    }
}
