use serde::{Deserialize, Serialize};

pub const RUN_ENDPOINT: &str = "/run";
pub const CODE_INPUT_FIELD: &str = "code-input";

/// A point reported by the backend, in the natural pixel space of the reference image.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RunResponse {
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub balls: Vec<Ball>,
}

/// Program text sent in the `code-input` field. The backend runs it with
/// `filename` already bound to the selected image.
pub fn compose_code_input(image: &str, code: &str) -> String {
    format!("filename = '{image}'\n{code}")
}
