use colored::*;

/// Console handles terminal output with colored formatting
pub struct Console {
    prompt_color: Color,
    response_color: Color,
}

impl Console {
    /// Create a new Console with default colors
    pub fn new() -> Self {
        Self {
            prompt_color: Color::Cyan,
            response_color: Color::Green,
        }
    }

    /// Print the rendered prompt with a colored header
    pub fn print_prompt(&self, prompt: &str) {
        println!("{}", "Prompt:".color(self.prompt_color).bold());
        println!("{prompt}");
    }

    /// Print the model response with a colored header
    pub fn print_response(&self, response: &str) {
        println!("{}", "Response:".color(self.response_color).bold());
        println!("{response}");
    }

    /// Print an error message
    pub fn print_error(&self, error: &str) {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
