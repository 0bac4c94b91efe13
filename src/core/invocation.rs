//! Builds the shell command line handed to the package manager.

/// Assemble the command line for the resolved command.
///
/// Trailing arguments are joined with single spaces and appended verbatim.
/// They are deliberately not shell-escaped: the wrapper forwards them
/// exactly as typed and leaves quoting to the user.
pub fn build_command_line(
    chosen: &str,
    trailing: &[String],
    package_manager: &str,
    use_root: bool,
    root_command: &str,
) -> String {
    let mut tokens: Vec<String> = Vec::new();

    if use_root {
        tokens.push(root_command.to_string());
    }

    tokens.push(package_manager.to_string());
    tokens.push(chosen.to_string());

    if !trailing.is_empty() {
        tokens.push(trailing.join(" "));
    }

    tokens.join(" ")
}
