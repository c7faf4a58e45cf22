use crate::tui_mode::app::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)))
}

pub fn render_help(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" RustPlot Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let options = &app.session.options;
    let (from, to) = options.domain;

    let help_text = vec![
        Line::from(Span::styled("RustPlot - Terminal Function Plotter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(format!("  Plots y = f(x) for x from {} to {} in steps of {}.", from, to, options.step)),
        Line::from("  Type a function of x and press Enter to draw it."),
        Line::from("  An invalid function leaves the previous plot on screen."),
        Line::from(""),
        heading("Operators:"),
        Line::from("  + - * / % : Arithmetic"),
        Line::from("  ^ or **   : Power       (e.g., x ^ 2)"),
        Line::from("  ( )       : Grouping    (e.g., (x + 1) * x)"),
        Line::from(""),
        heading("Degree Shorthand:"),
        Line::from("  sin30, sin 30, sin(30) : sine of 30 degrees (a constant)"),
        Line::from("  cos45, tan60           : likewise for cos and tan"),
        Line::from("  sin                    : alone, plots sin(x)"),
        Line::from("  sin(x), Math.sin(2)    : any other argument is in radians"),
        Line::from(""),
        heading("Functions:"),
        Line::from("  sin cos tan asin acos atan atan2(y, x)"),
        Line::from("  sinh cosh tanh asinh acosh atanh"),
        Line::from("  sqrt cbrt exp expm1 log/ln log10 log2 log1p"),
        Line::from("  abs sign floor ceil round trunc"),
        Line::from("  pow(a, b) hypot(a, ...) min(a, ...) max(a, ...)"),
        Line::from("  Any of them may be written with a Math. prefix."),
        Line::from(""),
        heading("Constants:"),
        Line::from("  pi, Math.PI : π (3.14159...)"),
        Line::from("  e, Math.E   : Euler's number (2.71828...)"),
        Line::from(""),
        heading("Commands:"),
        Line::from("  clear : Clear input history"),
        Line::from("  help  : Show this help screen"),
        Line::from("  quit  : Exit the plotter"),
        Line::from(""),
        heading("Navigation:"),
        Line::from("  ← → : Move cursor left/right"),
        Line::from("  Ctrl+←/→ : Move cursor by words"),
        Line::from("  Home/End : Move to start/end of line"),
        Line::from("  ↑ ↓ : Navigate input history"),
        Line::from("  Ctrl+U : Clear current input"),
        Line::from("  Esc/F1 : Close this screen (PgUp/PgDn, mouse wheel scroll)"),
        Line::from(""),
        heading("Examples:"),
        Line::from("  x ^ 2 / 100"),
        Line::from("  sin(x) * x"),
        Line::from("  sqrt(x * x - 1)"),
        Line::from("  sin30 + cos(x)"),
        Line::from("  Math.log(x)"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .scroll((app.help_scroll as u16, 0));

    frame.render_widget(Clear, frame.size());
    frame.render_widget(paragraph, frame.size());
}
