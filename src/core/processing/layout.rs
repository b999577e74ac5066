use crate::error::{Error, Result};

/// Grid geometry for a contact sheet: near-square, row-major, wide before tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
}

impl GridLayout {
    /// Derive the grid for `count` cells: `columns = floor(sqrt(count))`,
    /// `rows = ceil(count / columns)`. An empty set is rejected rather than
    /// dividing by zero.
    pub fn for_count(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(Error::EmptyGallery);
        }
        let columns = count.isqrt();
        let rows = count.div_ceil(columns);
        Ok(GridLayout { columns, rows })
    }

    /// Pixel origin of the row-major cell holding `index` (0-based).
    pub fn cell_origin(&self, index: usize, cell_width: i64, cell_height: i64) -> (i64, i64) {
        let col = (index % self.columns) as i64;
        let row = (index / self.columns) as i64;
        (col * cell_width, row * cell_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_counts() {
        assert_eq!(GridLayout::for_count(1).unwrap(), GridLayout { columns: 1, rows: 1 });
        assert_eq!(GridLayout::for_count(4).unwrap(), GridLayout { columns: 2, rows: 2 });
        assert_eq!(GridLayout::for_count(5).unwrap(), GridLayout { columns: 2, rows: 3 });
        assert_eq!(GridLayout::for_count(9).unwrap(), GridLayout { columns: 3, rows: 3 });
        assert_eq!(GridLayout::for_count(10).unwrap(), GridLayout { columns: 3, rows: 4 });
        assert_eq!(GridLayout::for_count(12).unwrap(), GridLayout { columns: 3, rows: 4 });
    }

    #[test]
    fn layout_accommodates_every_cell() {
        for count in 1..200 {
            let layout = GridLayout::for_count(count).unwrap();
            assert!(layout.columns * layout.rows >= count);
        }
    }

    #[test]
    fn empty_set_is_rejected() {
        assert!(matches!(GridLayout::for_count(0), Err(Error::EmptyGallery)));
    }

    #[test]
    fn origins_are_row_major() {
        let layout = GridLayout::for_count(5).unwrap();
        assert_eq!(layout.cell_origin(0, 512, 612), (0, 0));
        assert_eq!(layout.cell_origin(1, 512, 612), (512, 0));
        assert_eq!(layout.cell_origin(2, 512, 612), (0, 612));
        assert_eq!(layout.cell_origin(4, 512, 612), (0, 1224));
    }
}
