use super::point::PixelPoint;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// What a plot needs from a backend. Canvas units, origin top-left, `y` grows downwards; `line_to`
/// on an empty path acts like `move_to`.
pub trait DrawingSurface {
    fn clear(&mut self);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self, color: Rgb);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pen: Option<PixelPoint>,
    segments: Vec<(PixelPoint, PixelPoint)>,
}

impl Path {
    pub fn reset(&mut self) {
        self.pen = None;
        self.segments.clear();
    }

    pub fn move_to(&mut self, point: PixelPoint) {
        self.pen = Some(point);
    }

    pub fn line_to(&mut self, point: PixelPoint) {
        if let Some(from) = self.pen {
            self.segments.push((from, point));
        }
        self.pen = Some(point);
    }

    pub fn segments(&self) -> &[(PixelPoint, PixelPoint)] {
        &self.segments
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    BeginPath,
    MoveTo(PixelPoint),
    LineTo(PixelPoint),
    Stroke(Rgb),
    FillText { text: String, at: PixelPoint },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub from: PixelPoint,
    pub to: PixelPoint,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub at: PixelPoint,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub strokes: Vec<Stroke>,
    pub labels: Vec<Label>,
}

/// Remembers the calls made on it. `clear` drops earlier commands, so one render pass leaves
/// exactly one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface::default()
    }

    /// Resolves the recorded paths into the strokes and labels they paint.
    pub fn frame(&self) -> Frame {
        let mut frame = Frame::default();
        let mut path = Path::default();

        for command in &self.commands {
            match command {
                DrawCommand::Clear => frame = Frame::default(),
                DrawCommand::BeginPath => path.reset(),
                DrawCommand::MoveTo(point) => path.move_to(*point),
                DrawCommand::LineTo(point) => path.line_to(*point),
                DrawCommand::Stroke(color) => {
                    frame.strokes.extend(
                        path.segments()
                            .iter()
                            .map(|&(from, to)| Stroke { from, to, color: *color }),
                    );
                }
                DrawCommand::FillText { text, at } => {
                    frame.labels.push(Label { text: text.clone(), at: *at });
                }
            }
        }
        frame
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo(PixelPoint(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo(PixelPoint(x, y)));
    }

    fn stroke(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Stroke(color));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(DrawCommand::FillText { text: text.to_string(), at: PixelPoint(x, y) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn frame_resolves_paths() {
        let mut surface = RecordingSurface::new();
        surface.move_to(99.0, 99.0);
        surface.clear();
        surface.begin_path();
        surface.line_to(0.0, 0.0);
        surface.line_to(1.0, 1.0);
        surface.move_to(5.0, 5.0);
        surface.line_to(6.0, 5.0);
        surface.fill_text("0", 2.0, 3.0);
        surface.stroke(Rgb::WHITE);

        assert_eq!(surface.commands.first(), Some(&DrawCommand::Clear));
        assert_eq!(
            surface.frame(),
            Frame {
                strokes: vec![
                    Stroke { from: PixelPoint(0.0, 0.0), to: PixelPoint(1.0, 1.0), color: Rgb::WHITE },
                    Stroke { from: PixelPoint(5.0, 5.0), to: PixelPoint(6.0, 5.0), color: Rgb::WHITE },
                ],
                labels: vec![Label { text: "0".to_string(), at: PixelPoint(2.0, 3.0) }],
            }
        );
    }

    #[test]
    fn begin_path_forgets_stroked_segments() {
        let mut surface = RecordingSurface::new();
        surface.begin_path();
        surface.move_to(0.0, 0.0);
        surface.line_to(1.0, 0.0);
        surface.stroke(Rgb::BLACK);
        surface.begin_path();
        surface.move_to(0.0, 1.0);
        surface.line_to(1.0, 1.0);
        surface.stroke(Rgb::WHITE);

        let colors = surface.frame().strokes.iter().map(|s| s.color).collect::<Vec<_>>();
        assert_eq!(colors, vec![Rgb::BLACK, Rgb::WHITE]);
    }
}
