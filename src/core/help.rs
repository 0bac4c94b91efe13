//! Help screen rendering.
//!
//! The help text shows the loaded configuration (package manager, command
//! vocabulary, shortcut table), so it is rendered here from the config
//! instead of by clap.

use crate::config::Config;

/// Render the full help screen for the given configuration.
pub fn render(config: &Config, overridden: bool) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("Pak: package manager wrapper".to_string());
    lines.push(format!(
        "Current package manager is: {}{}",
        config.package_manager,
        if overridden { " (overridden)" } else { "" }
    ));

    if config.use_root {
        lines.push(format!("Using root with command: {}", config.root_command));
    } else {
        lines.push("Not using root".to_string());
    }

    lines.push(String::new());
    lines.push("Usage: pak <command> [package]".to_string());
    lines.push("Example: pak in hello".to_string());

    lines.push(String::new());
    lines.push("The available commands are:".to_string());
    for command in &config.commands {
        lines.push(format!("  {}", command));
    }

    lines.push(String::new());
    lines.push("The available shortcuts are:".to_string());
    for (alias, mapped) in config.shortcuts.iter().zip(&config.shortcut_mappings) {
        lines.push(format!("  {}: {}", alias, mapped));
    }

    lines.push(String::new());
    lines.push("The available flags are:".to_string());
    lines.push("  --help, -h: Shows this help screen".to_string());
    lines.push("  --root, -r: Bypasses the root user check".to_string());

    lines.push(String::new());
    lines.push(
        "Pak uses a string distance algorithm, so `pak in` is valid as is `pak inst` or `pak install`"
            .to_string(),
    );
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Config {
        Config {
            package_manager: "apt".to_string(),
            commands: vec!["install".to_string(), "remove".to_string()],
            use_root: true,
            root_command: "sudo".to_string(),
            shortcuts: vec!["in".to_string()],
            shortcut_mappings: vec!["install".to_string()],
        }
    }

    #[test]
    fn lists_every_command_and_shortcut() {
        let help = render(&sample_config(), false);
        assert!(help.contains("  install"));
        assert!(help.contains("  remove"));
        assert!(help.contains("  in: install"));
    }

    #[test]
    fn shows_root_command_when_enabled() {
        let help = render(&sample_config(), false);
        assert!(help.contains("Using root with command: sudo"));
    }

    #[test]
    fn shows_not_using_root_when_disabled() {
        let mut config = sample_config();
        config.use_root = false;
        let help = render(&config, false);
        assert!(help.contains("Not using root"));
        assert!(!help.contains("Using root with command"));
    }

    #[test]
    fn marks_overridden_configs() {
        let help = render(&sample_config(), true);
        assert!(help.contains("Current package manager is: apt (overridden)"));
    }
}
