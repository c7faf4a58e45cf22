use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use rustplot::expr_engine::{tokenize, Func, Token, NAMESPACE, VARIABLE};
use rustplot::plot::Rgb;
use std::ops::Range;
use std::time::Duration;

pub fn is_math_function(word: &str) -> bool {
    let name = word.strip_prefix(NAMESPACE).unwrap_or(word);
    if Func::from_name(name).is_some() || matches!(name, "pi" | "PI" | "e" | "E") {
        return true;
    }
    // degree shorthand such as `sin30`
    let head = name.trim_end_matches(|c: char| c.is_ascii_digit());
    head.len() < name.len() && matches!(head, "sin" | "cos" | "tan")
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub fn format_duration(duration: Duration) -> String {
    format!("{:.3} ms", duration.as_secs_f64() * 1000.0)
}

/// Splits the input into styled spans: functions, numbers, operators and the variable each get
/// their own color, and the part an error points at is shown in red.
pub fn highlight_input(input: &str, error_span: Option<Range<usize>>) -> Vec<Span<'static>> {
    let function_style = Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD);

    let operator_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let number_style = Style::default()
        .fg(Color::LightGreen);

    let variable_style = Style::default()
        .fg(Color::LightMagenta);

    let error_style = Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::UNDERLINED);

    let base_style = Style::default().fg(Color::White);

    // one style per byte, so token and error ranges can be laid over each other
    let mut styles = vec![base_style; input.len()];
    if let Ok(lexemes) = tokenize(input) {
        for lexeme in lexemes {
            let style = match &lexeme.token {
                Token::Number { .. } => number_style,
                Token::Op(_) => operator_style,
                Token::Ident(name) if name == VARIABLE => variable_style,
                Token::Ident(name) if is_math_function(name) => function_style,
                _ => base_style,
            };
            styles[lexeme.span].iter_mut().for_each(|s| *s = style);
        }
    }
    if let Some(span) = error_span {
        let span = span.start.min(input.len())..span.end.min(input.len());
        styles[span].iter_mut().for_each(|s| *s = error_style);
    }

    let mut spans = Vec::new();
    let mut current = String::new();
    let mut current_style = base_style;

    for (i, c) in input.char_indices() {
        let style = styles[i];
        if style != current_style && !current.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut current), current_style));
        }
        current_style = style;
        current.push(c);
    }

    if !current.is_empty() {
        spans.push(Span::styled(current, current_style));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(spans: &[Span<'_>]) -> Vec<String> {
        spans.iter().map(|span| span.content.to_string()).collect()
    }

    #[test]
    fn recognizes_library_names() {
        assert!(is_math_function("Math.sin"));
        assert!(is_math_function("sin30"));
        assert!(is_math_function("PI"));
        assert!(is_math_function("expm1"));
        assert!(is_math_function("Math.log10"));
        assert!(!is_math_function("foo"));
        assert!(!is_math_function("exp2"));
    }

    #[test]
    fn splits_by_token_kind() {
        let spans = highlight_input("sin(x)+2", None);
        assert_eq!(texts(&spans), vec!["sin", "(", "x", ")", "+", "2"]);
        assert_eq!(spans[0].style.fg, Some(Color::LightBlue));
        assert_eq!(spans[5].style.fg, Some(Color::LightGreen));
    }

    #[test]
    fn marks_error_span() {
        let spans = highlight_input("x + y", Some(4..5));
        assert_eq!(texts(&spans), vec!["x", " ", "+", " ", "y"]);
        assert_eq!(spans[4].style.fg, Some(Color::Red));
    }
}
