// Constants for the letterloop interpreter

/// Number of variable slots, one per lowercase letter
pub const VARIABLE_COUNT: usize = 26;

/// Initial capacity of a loop's condition/body token buffer
pub const TOKEN_BUFFER_INITIAL_CAPACITY: usize = 16;

/// Written once after the terminating `.` has been consumed
pub const SUCCESS_NOTICE: &str = "Program parsed successfully.";

/// Prompt written before an input statement reads a line
pub fn input_prompt(variable: char) -> String {
    format!("Input for variable '{}': ", variable)
}
