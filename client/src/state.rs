use ballplot_shared::{compose_code_input, Ball, RunResponse};

/// What the page shows, owned by the request bridge. The presentation layer renders from this.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewModel {
    pub image: String,
    pub stdout: String,
    pub balls: Vec<Ball>,
    submissions: u32,
}

impl ViewModel {
    pub fn new(image: &str) -> Self {
        Self {
            image: image.to_string(),
            ..Self::default()
        }
    }

    pub fn select_image(&mut self, image: &str) {
        self.image = image.to_string();
    }

    pub fn image_src(&self, extension: &str) -> String {
        format!("{}{}", self.image, extension)
    }

    pub fn code_input(&self, code: &str) -> String {
        compose_code_input(&self.image, code)
    }

    /// Numbers each submission; only used to correlate log lines.
    pub fn begin_submission(&mut self) -> u32 {
        self.submissions += 1;
        self.submissions
    }

    pub fn apply_response(&mut self, response: RunResponse) {
        let RunResponse { stdout, balls } = response;
        self.stdout = stdout;
        self.balls = balls;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_replaces_previous_results() {
        let mut view = ViewModel::new("maze");
        view.apply_response(RunResponse {
            stdout: "first".into(),
            balls: vec![Ball { x: 1.0, y: 1.0 }, Ball { x: 2.0, y: 2.0 }],
        });
        view.apply_response(RunResponse {
            stdout: "second".into(),
            balls: vec![Ball { x: 3.0, y: 3.0 }],
        });
        assert_eq!(view.stdout, "second");
        assert_eq!(view.balls, vec![Ball { x: 3.0, y: 3.0 }]);
        assert_eq!(view.image, "maze");
    }

    #[test]
    fn code_input_uses_current_image() {
        let mut view = ViewModel::new("one");
        view.select_image("two");
        assert_eq!(view.code_input("x = 1"), "filename = 'two'\nx = 1");
        assert_eq!(view.image_src(".png"), "two.png");
    }

    #[test]
    fn submissions_count_up() {
        let mut view = ViewModel::default();
        assert_eq!(view.begin_submission(), 1);
        assert_eq!(view.begin_submission(), 2);
    }
}
