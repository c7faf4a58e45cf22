#[cfg(feature = "tui")]
mod render_help;
#[cfg(feature = "tui")]
mod tui_mode;
#[cfg(feature = "line")]
mod line_mode;

use anyhow::Result;

#[cfg(feature = "tui")]
fn main() -> Result<()> {
    // --line picks the plain terminal front-end when both are compiled in
    #[cfg(feature = "line")]
    if std::env::args().skip(1).any(|arg| arg == "--line") {
        return line_mode::run_line();
    }
    tui_mode::run_tui()
}

#[cfg(all(feature = "line", not(feature = "tui")))]
fn main() -> Result<()> {
    line_mode::run_line()
}

#[cfg(not(any(feature = "tui", feature = "line")))]
fn main() -> Result<()> {
    anyhow::bail!("rustplot was built without a front-end; enable the `tui` or `line` feature")
}
