use serde::Deserialize;

/// Hard cap sent with every request, regardless of input.
pub const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Which instruction template to wrap around the snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Comment,
    ExplainLineByLine,
}

/// Two-valued creativity control exposed by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Creativity {
    Low,
    High,
}

/// Sampling parameters for a single generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    /// Derives the config deterministically from the creativity level.
    pub fn for_creativity(creativity: Creativity) -> Self {
        let temperature = match creativity {
            Creativity::Low => 0.30,
            Creativity::High => 0.95,
        };
        Self {
            temperature,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

/// Instruction preamble for the comment generator. The snippet-validity and
/// no-malicious-code checks here are advisory only; the model is asked to
/// enforce them, the service does not.
pub const COMMENT_PREAMBLE: &str = "\
You are an AI code comment generator for multiple languages. Validate that provided code snippets are valid code snippets and no malicious code. If not valid, ask for a valid snippet. Identify language if not provided. Use appropriate comment syntax. Break code into logical sections, comment each section's functionality.
For functions/methods, comment:

- Purpose
- Input parameters
- Return values
- Potential effects/exceptions

Briefly explain the algorithms, data structures, and patterns used. Avoid redundancy but provide enough context for unfamiliar readers. Maintain a professional, helpful tone. Address issues/clarifications respectfully.

You should not generate any new code yourself, but rather understand and comment on the provided code snippet.

Elevate documentation practices, promote collaboration, and enhance developer experience.
Here is the code snippet for which code comments need to be generated:";

/// Instruction preamble for the line-by-line explainer.
pub const EXPLAIN_PREAMBLE: &str = "\
You are an AI code explainer for multiple languages. Validate that provided code snippets are valid code snippets and no malicious code. If not valid, ask for a valid snippet. Identify language if not provided. Walk through the snippet line by line, stating what each line does and how it contributes to the whole. Briefly explain the algorithms, data structures, and patterns used. Avoid redundancy but provide enough context for unfamiliar readers. Maintain a professional, helpful tone.

You should not generate any new code yourself, but rather understand and explain the provided code snippet.

Here is the code snippet to explain line by line:";

/// Embeds the snippet verbatim after the fixed preamble for the chosen mode.
/// An empty snippet is accepted and yields a degenerate prompt.
pub fn build_prompt(mode: Mode, snippet: &str) -> String {
    let preamble = match mode {
        Mode::Comment => COMMENT_PREAMBLE,
        Mode::ExplainLineByLine => EXPLAIN_PREAMBLE,
    };
    format!("{preamble}\n\n{snippet}\n")
}
