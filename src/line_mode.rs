use anyhow::{Context, Result};
use rustplot::plot::{GridSurface, RenderStats};
use rustplot::Session;
use std::io::{stdin, stdout, Write};
use termion::{
    clear::CurrentLine as ClearLine,
    cursor::{DetectCursorPos, Goto},
    event::Key,
    input::TermRead,
    raw::IntoRawMode,
};
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "f(x) = ";
const GRID_COLS: usize = 80;
const GRID_ROWS: usize = 40;

fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or_else(|| s.len())
}

/// Draws the session's current expression as a character plot. Raw mode needs explicit
/// carriage returns, so every row ends with `\r\n`.
fn print_plot(out: &mut impl Write, session: &Session) -> Result<RenderStats> {
    let (width, height) = session.options.canvas_size;
    let mut grid = GridSurface::new(GRID_COLS, GRID_ROWS, (width, height));
    let stats = session.render_to(&mut grid);

    write!(out, "\r\n  y = {}\r\n", session.current())?;
    for line in grid.lines() {
        write!(out, "{}\r\n", line)?;
    }
    write!(
        out,
        "  {} points plotted, {} skipped\r\n\r\n",
        stats.plotted, stats.skipped
    )?;
    out.flush()?;
    Ok(stats)
}

pub fn run_line() -> Result<()> {
    println!("Rust Function Plotter");
    println!("Type a function of x, e.g. sin(x) * x or x ^ 2 / 100");
    println!("sin30, cos45, tan60 are read in degrees; sin(x) in radians");
    println!("Navigation: ←/→, Backspace/Delete, Home/End, ↑/↓ for history");
    println!("Special commands: 'quit' to exit, 'clear' to reset history\n");

    let mut stdout = stdout()
        .into_raw_mode()
        .context("failed to switch the terminal to raw mode")?;
    let mut session = Session::default();
    let mut history: Vec<String> = Vec::new();
    let mut history_index = 0;

    print_plot(&mut stdout, &session)?;

    let stdin = stdin();
    let mut keys = stdin.keys();

    loop {
        write!(stdout, "{}{}", ClearLine, PROMPT)?;
        stdout.flush()?;

        let mut expression = String::new();
        let mut cursor_pos = 0;
        let (_, initial_y) = stdout.cursor_pos()?;

        loop {
            write!(
                stdout,
                "{}{}{}{}",
                Goto(1, initial_y),
                ClearLine,
                PROMPT,
                expression
            )?;

            let prefix_end = char_index_to_byte_index(&expression, cursor_pos);
            let column = 1 + PROMPT.width() + expression[..prefix_end].width();
            write!(stdout, "{}", Goto(column as u16, initial_y))?;
            stdout.flush()?;

            let Some(key) = keys.next() else {
                write!(stdout, "\r\n")?;
                return Ok(());
            };

            match key? {
                Key::Char('\n') => break,
                Key::Ctrl('c') | Key::Ctrl('d') => {
                    write!(stdout, "\r\nGoodbye!\r\n")?;
                    return Ok(());
                }
                Key::Ctrl('u') => {
                    expression.clear();
                    cursor_pos = 0;
                }
                Key::Char(c) => {
                    let byte_idx = char_index_to_byte_index(&expression, cursor_pos);
                    expression.insert(byte_idx, c);
                    cursor_pos += 1;
                }
                Key::Backspace if cursor_pos > 0 => {
                    cursor_pos -= 1;
                    let byte_idx = char_index_to_byte_index(&expression, cursor_pos);
                    if let Some(c) = expression[byte_idx..].chars().next() {
                        expression.drain(byte_idx..byte_idx + c.len_utf8());
                    }
                }
                Key::Delete if cursor_pos < expression.chars().count() => {
                    let byte_idx = char_index_to_byte_index(&expression, cursor_pos);
                    if let Some(c) = expression[byte_idx..].chars().next() {
                        expression.drain(byte_idx..byte_idx + c.len_utf8());
                    }
                }
                Key::Left if cursor_pos > 0 => cursor_pos -= 1,
                Key::Right if cursor_pos < expression.chars().count() => cursor_pos += 1,
                Key::Home => cursor_pos = 0,
                Key::End => cursor_pos = expression.chars().count(),
                Key::Up => {
                    if history_index > 0 {
                        history_index -= 1;
                        expression = history[history_index].clone();
                        cursor_pos = expression.chars().count();
                    }
                }
                Key::Down => {
                    if history_index + 1 < history.len() {
                        history_index += 1;
                        expression = history[history_index].clone();
                        cursor_pos = expression.chars().count();
                    } else {
                        history_index = history.len();
                        expression.clear();
                        cursor_pos = 0;
                    }
                }
                _ => {}
            }
        }

        let input = expression.trim();
        if input.is_empty() {
            write!(stdout, "\r\n")?;
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                write!(stdout, "\r\nGoodbye!\r\n")?;
                return Ok(());
            }
            "clear" | "reset" => {
                history.clear();
                history_index = 0;
                write!(stdout, "\r\nHistory cleared\r\n\r\n")?;
                continue;
            }
            _ => {}
        }

        if history.last().map(String::as_str) != Some(input) {
            history.push(input.to_string());
        }
        history_index = history.len();

        session.input = input.to_string();
        let rejected = session.submit().err().map(ToString::to_string);
        match rejected {
            None => {
                print_plot(&mut stdout, &session)?;
            }
            Some(message) => {
                write!(
                    stdout,
                    "\r\n  Invalid function! {}\r\n  still plotting y = {}\r\n\r\n",
                    message,
                    session.current()
                )?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plot_output_uses_raw_mode_line_endings() {
        let mut out = Vec::new();
        let stats = print_plot(&mut out, &Session::default()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(stats.plotted, 2001);
        assert!(text.starts_with("\r\n  y = Math.sin(x)\r\n"));
        assert_eq!(text.matches("\r\n").count(), GRID_ROWS + 4);
        assert!(!text.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn byte_index_of_multibyte_text() {
        assert_eq!(char_index_to_byte_index("π*x", 1), 2);
        assert_eq!(char_index_to_byte_index("x", 5), 1);
    }
}
