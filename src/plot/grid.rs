use super::point::{clip_segment, PixelPoint};
use super::surface::{DrawingSurface, Path, Rgb};
use std::fmt;

/// A character raster: canvas units are scaled down onto a grid of terminal cells.
///
/// Colors cannot be shown, so each cell takes a glyph that follows the direction of the segment
/// crossing it. Later strokes overwrite earlier ones.
#[derive(Clone, Debug)]
pub struct GridSurface {
    cols: usize,
    rows: usize,
    canvas: (f64, f64),
    cells: Vec<char>,
    path: Path,
}

impl GridSurface {
    /// Creates a blank grid of `cols` x `rows` cells covering a `canvas_size` canvas.
    pub fn new(cols: usize, rows: usize, canvas_size: (u16, u16)) -> Self {
        GridSurface {
            cols,
            rows,
            canvas: (canvas_size.0 as f64, canvas_size.1 as f64),
            cells: vec![' '; cols * rows],
            path: Path::default(),
        }
    }

    /// The cell containing a canvas point, in fractional cell units.
    fn to_cell(&self, point: PixelPoint) -> (f64, f64) {
        (
            point.0 / self.canvas.0 * self.cols as f64,
            point.1 / self.canvas.1 * self.rows as f64,
        )
    }

    fn put(&mut self, col: i64, row: i64, glyph: char) {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return;
        }
        self.cells[row as usize * self.cols + col as usize] = glyph;
    }

    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    fn raster_segment(&mut self, from: PixelPoint, to: PixelPoint) {
        let Some((from, to)) = clip_segment(from, to, self.canvas.0, self.canvas.1) else {
            return;
        };
        let (c0, r0) = self.to_cell(from);
        let (c1, r1) = self.to_cell(to);
        let (dc, dr) = (c1 - c0, r1 - r0);

        let glyph = if dr.abs() <= dc.abs() / 2.0 {
            '-'
        } else if dc.abs() <= dr.abs() / 2.0 {
            '|'
        } else if (dc > 0.0) == (dr > 0.0) {
            '\\'
        } else {
            '/'
        };

        let steps = dc.abs().max(dr.abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            // the right and bottom edges belong to the last column and row
            let col = (c0 + t * dc).floor().min(self.cols as f64 - 1.0);
            let row = (r0 + t * dr).floor().min(self.rows as f64 - 1.0);
            self.put(col as i64, row as i64, glyph);
        }
    }

    /// The grid as text, one line per row with trailing blanks removed.
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols.max(1))
            .take(self.rows)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}

impl DrawingSurface for GridSurface {
    fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = ' ');
        self.path.reset();
    }

    fn begin_path(&mut self) {
        self.path.reset();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to(PixelPoint(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to(PixelPoint(x, y));
    }

    fn stroke(&mut self, _color: Rgb) {
        let segments = self.path.segments().to_vec();
        for (from, to) in segments {
            self.raster_segment(from, to);
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let (col, row) = self.to_cell(PixelPoint(x, y));
        let (col, row) = (col.floor() as i64, row.floor() as i64);
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i64, row, ch);
        }
    }
}

impl fmt::Display for GridSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn axes_and_text() {
        let mut grid = GridSurface::new(5, 5, (100, 100));
        grid.clear();
        grid.begin_path();
        grid.move_to(50.0, 0.0);
        grid.line_to(50.0, 100.0);
        grid.move_to(0.0, 50.0);
        grid.line_to(100.0, 50.0);
        grid.stroke(Rgb::BLACK);
        grid.fill_text("12", 70.0, 70.0);

        assert_eq!(grid.lines(), vec!["  |", "  |", "-----", "  |12", "  |"]);
    }

    #[test]
    fn diagonal_and_clipping() {
        let mut grid = GridSurface::new(4, 4, (40, 40));
        grid.begin_path();
        grid.move_to(-400.0, 445.0);
        grid.line_to(445.0, -400.0);
        grid.stroke(Rgb::BLACK);

        assert_eq!(grid.get(0, 3), Some('/'));
        assert_eq!(grid.get(2, 2), Some('/'));
        assert_eq!(grid.get(3, 0), Some('/'));
        assert_eq!(grid.get(0, 0), Some(' '));
        assert_eq!(grid.get(3, 3), Some(' '));
        assert_eq!(grid.get(4, 0), None);
    }
}
