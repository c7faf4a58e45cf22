use rustplot::plot::{Frame, GapPolicy, PlotOptions, RecordingSurface, RenderStats, Rgb};
use rustplot::Session;
use std::time::{Duration, Instant};
use unicode_segmentation::UnicodeSegmentation;

/// Terminal backgrounds are dark, so the default black strokes would be invisible.
const AXIS_COLOR: Rgb = Rgb(128, 128, 128);
const CURVE_COLOR: Rgb = Rgb(0, 215, 255);

pub struct App {
    pub session: Session,
    pub cursor_position: usize,
    pub input_scroll: usize,
    pub history: Vec<String>,
    pub cursor_history: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: usize,
    pub terminal_too_small: bool,
    pub frame: Frame,
    pub last_render: Option<(RenderStats, Duration)>,
    rendered_revision: Option<u64>,
}

impl App {
    pub fn new() -> Self {
        let options = PlotOptions::default()
            .colors(AXIS_COLOR, CURVE_COLOR)
            .gaps(GapPolicy::Break);
        let session = Session::new(options);
        let cursor_position = session.input.chars().count();

        let mut app = App {
            session,
            cursor_position,
            input_scroll: 0,
            history: Vec::new(),
            cursor_history: 0,
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            terminal_too_small: false,
            frame: Frame::default(),
            last_render: None,
            rendered_revision: None,
        };
        app.refresh_frame();
        app
    }

    pub fn input(&self) -> &str {
        &self.session.input
    }

    /// Re-renders into a fresh frame when the plotted expression changed. The frame is swapped
    /// in whole, so the screen never shows half of a render.
    pub fn refresh_frame(&mut self) {
        if self.rendered_revision == Some(self.session.revision()) {
            return;
        }

        let start_time = Instant::now();
        let mut surface = RecordingSurface::new();
        let stats = self.session.render_to(&mut surface);
        self.frame = surface.frame();
        self.last_render = Some((stats, start_time.elapsed()));
        self.rendered_revision = Some(self.session.revision());
    }

    pub fn adjust_input_scroll(&mut self, visible_width: usize) {
        let total_chars = self.input().chars().count();
        let cursor_pos = self.cursor_position;

        if cursor_pos < self.input_scroll {
            self.input_scroll = cursor_pos;
        }
        else if cursor_pos >= self.input_scroll + visible_width {
            self.input_scroll = cursor_pos - visible_width + 1;
        }

        if self.input_scroll > total_chars.saturating_sub(visible_width) {
            self.input_scroll = total_chars.saturating_sub(visible_width);
        }
    }

    /// The "Draw" action.
    pub fn submit(&mut self) {
        let input = self.input().trim().to_string();

        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                self.should_quit = true;
                return;
            }
            "clear" | "reset" => {
                self.history.clear();
                self.cursor_history = 0;
                self.clear_input();
                return;
            }
            "help" => {
                self.show_help = true;
                self.clear_input();
                return;
            }
            _ => {}
        }

        if !input.is_empty() && self.history.last() != Some(&input) {
            self.history.push(input);
        }
        self.cursor_history = self.history.len();

        // the input stays in the field either way, so a typo can be fixed in place
        let _ = self.session.submit();
        self.refresh_frame();
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = App::char_index_to_byte_index(self.input(), self.cursor_position);
        self.session.input.insert(byte_idx, c);
        self.cursor_position += 1;
    }

    pub fn delete_before_cursor(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.delete_at_cursor();
        }
    }

    pub fn delete_at_cursor(&mut self) {
        let byte_idx = App::char_index_to_byte_index(self.input(), self.cursor_position);
        let next_char = self.input()[byte_idx..].chars().next();
        if let Some(c) = next_char {
            let end = byte_idx + c.len_utf8();
            self.session.input.drain(byte_idx..end);
        }
    }

    pub fn move_cursor(&mut self, direction: i32) {
        match direction {
            -1 => self.cursor_position = self.cursor_position.saturating_sub(1),
            1 => self.cursor_position = (self.cursor_position + 1).min(self.input().chars().count()),
            _ => {}
        }
    }

    /// Jumps to the start of the previous word or the end of the next one.
    pub fn move_cursor_by_words(&mut self, direction: i32) {
        let input = self.input();
        let to_chars = |byte: usize| input[..byte].chars().count();
        let words = input
            .unicode_word_indices()
            .map(|(start, word)| (to_chars(start), to_chars(start + word.len())))
            .collect::<Vec<_>>();

        let cursor = self.cursor_position;
        let target = if direction < 0 {
            words.iter()
                .rev()
                .map(|&(start, _)| start)
                .find(|&start| start < cursor)
                .unwrap_or(0)
        } else {
            words.iter()
                .map(|&(_, end)| end)
                .find(|&end| end > cursor)
                .unwrap_or_else(|| input.chars().count())
        };
        self.cursor_position = target;
    }

    pub fn navigate_history(&mut self, direction: i32) {
        if direction < 0 && self.cursor_history > 0 {
            self.cursor_history -= 1;
        } else if direction > 0 && self.cursor_history < self.history.len() {
            self.cursor_history += 1;
        }

        match self.history.get(self.cursor_history) {
            Some(entry) => self.session.input = entry.clone(),
            None => self.session.input.clear(),
        }
        self.cursor_position = self.input().chars().count();
        self.input_scroll = 0;
    }

    pub fn clear_input(&mut self) {
        self.session.input.clear();
        self.cursor_position = 0;
        self.input_scroll = 0;
    }

    pub fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
        s.char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or_else(|| s.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_text(app: &mut App, text: &str) {
        app.clear_input();
        for c in text.chars() {
            app.insert_char(c);
        }
    }

    #[test]
    fn starts_with_rendered_sine() {
        let app = App::new();
        assert_eq!(app.input(), "Math.sin(x)");
        assert_eq!(app.cursor_position, 11);
        assert!(!app.frame.strokes.is_empty());
        assert_eq!(app.last_render.map(|(stats, _)| stats.plotted), Some(2001));
    }

    #[test]
    fn failed_draw_keeps_frame() {
        let mut app = App::new();
        type_text(&mut app, "x ^ 2");
        app.submit();
        let frame = app.frame.clone();

        type_text(&mut app, "x ^");
        app.submit();
        assert!(app.session.is_error());
        assert_eq!(app.frame, frame);
        assert_eq!(app.input(), "x ^");
        assert_eq!(app.history, vec!["x ^ 2".to_string(), "x ^".to_string()]);
    }

    #[test]
    fn editing() {
        let mut app = App::new();
        type_text(&mut app, "sin(x)");
        app.move_cursor(-1);
        app.delete_before_cursor();
        assert_eq!(app.input(), "sin()");
        app.insert_char('y');
        assert_eq!(app.input(), "sin(y)");
        app.delete_at_cursor();
        assert_eq!(app.input(), "sin(y");
    }

    #[test]
    fn word_movement() {
        let mut app = App::new();
        type_text(&mut app, "cos(x) + tan");
        app.move_cursor_by_words(-1);
        assert_eq!(app.cursor_position, 9);
        app.move_cursor_by_words(-1);
        assert_eq!(app.cursor_position, 4);
        app.move_cursor_by_words(1);
        assert_eq!(app.cursor_position, 5);
    }

    #[test]
    fn history_navigation() {
        let mut app = App::new();
        for entry in ["x", "x ^ 2"] {
            type_text(&mut app, entry);
            app.submit();
        }
        app.navigate_history(-1);
        assert_eq!(app.input(), "x ^ 2");
        app.navigate_history(-1);
        assert_eq!(app.input(), "x");
        app.navigate_history(1);
        app.navigate_history(1);
        assert_eq!(app.input(), "");
    }

    #[test]
    fn commands() {
        let mut app = App::new();
        type_text(&mut app, "help");
        app.submit();
        assert!(app.show_help);
        assert_eq!(app.input(), "");

        type_text(&mut app, "quit");
        app.submit();
        assert!(app.should_quit);
    }
}
