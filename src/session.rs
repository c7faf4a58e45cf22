use crate::error::ExpressionError;
use crate::normalizer::{normalize, NormalizedExpression, DEFAULT_EXPRESSION};
use crate::plot::{render, DrawingSurface, PlotOptions, RenderStats};

/// The state a front-end keeps for the plotter: what is being typed, what is plotted, and whether
/// the last submission failed.
#[derive(Debug, Clone)]
pub struct Session {
    /// Raw text of the input field. Never evaluated directly.
    pub input: String,
    current: NormalizedExpression,
    error: Option<ExpressionError>,
    revision: u64,
    pub options: PlotOptions,
}

impl Session {
    pub fn new(options: PlotOptions) -> Self {
        Session {
            input: DEFAULT_EXPRESSION.to_string(),
            current: NormalizedExpression::default(),
            error: None,
            revision: 0,
            options,
        }
    }

    /// The expression currently plotted.
    pub fn current(&self) -> &NormalizedExpression {
        &self.current
    }

    /// The reason the last submission was rejected, cleared by the next successful one.
    pub fn error(&self) -> Option<&ExpressionError> {
        self.error.as_ref()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Bumped every time a new expression is accepted; front-ends re-render when it changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Normalizes the input. On success it becomes the plotted expression; on failure the error
    /// flag is raised and the plotted expression is left as it was.
    pub fn submit(&mut self) -> Result<&NormalizedExpression, &ExpressionError> {
        match normalize(&self.input) {
            Ok(expr) => {
                self.current = expr;
                self.error = None;
                self.revision += 1;
                Ok(&self.current)
            }
            Err(e) => Err(&*self.error.insert(e)),
        }
    }

    /// Redraws the plotted expression onto `surface` in one clear-then-draw pass.
    pub fn render_to<S>(&self, surface: &mut S) -> RenderStats
    where
        S: DrawingSurface + ?Sized,
    {
        render(&self.current, &self.options, surface)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(PlotOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::RecordingSurface;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_with_sine() {
        let session = Session::default();
        assert_eq!(session.input, "Math.sin(x)");
        assert_eq!(session.current().as_str(), "Math.sin(x)");
        assert!(!session.is_error());
        assert_eq!(session.revision(), 0);
    }

    #[test]
    fn accepted_input_replaces_expression() {
        let mut session = Session::default();
        session.input = "cos(45)".to_string();
        let text = session.submit().unwrap().as_str().to_string();
        assert_eq!(text, session.current().as_str());
        assert_eq!(session.revision(), 1);
        assert!(!session.is_error());
    }

    #[test]
    fn rejected_input_keeps_previous_expression() {
        let mut session = Session::default();
        session.input = "x ^ 2".to_string();
        session.submit().unwrap();
        let before = session.current().clone();

        session.input = "x ^ (2".to_string();
        assert!(session.submit().is_err());
        assert!(session.is_error());
        assert_eq!(session.current(), &before);
        assert_eq!(session.revision(), 1);

        session.input = "undefined_name + 1".to_string();
        assert!(session.submit().is_err());
        assert_eq!(session.current(), &before);

        // the next good submission clears the flag
        session.input = "x".to_string();
        session.submit().unwrap();
        assert!(!session.is_error());
        assert_eq!(session.revision(), 2);
    }

    #[test]
    fn failed_submit_does_not_change_the_frame() {
        let mut session = Session::default();
        let mut before = RecordingSurface::new();
        session.render_to(&mut before);

        session.input = "sin(".to_string();
        let _ = session.submit();
        let mut after = RecordingSurface::new();
        session.render_to(&mut after);

        assert_eq!(before, after);
    }
}
