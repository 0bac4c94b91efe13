use clap::Parser;
use heck::ToTitleCase;

use pak::config::{self, LoadedConfig};
use pak::utils::args;
use pak::{executor, help, invocation, log_status, resolver};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "pak")]
#[command(version = VERSION)]
#[command(about = "Wrapper that unifies software management commands between distros")]
#[command(disable_help_flag = true)]
struct Cli {
    /// Show the help screen
    #[arg(long, short = 'h')]
    help: bool,

    /// Bypass the root user check
    #[arg(long, short = 'r')]
    root: bool,

    /// Command to resolve, followed by arguments for the package manager
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::ExitCode::from(exit_code_to_u8(code)),
        Err(err) => {
            eprintln!("{}: {}", err.code(), err);
            std::process::ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> pak::Result<i32> {
    // Pak invokes root itself when the config asks for it; running the
    // wrapper as root would hand elevated rights to every invocation.
    if !cli.root && is_root() {
        eprintln!("Do not run as root, this program will invoke root for you if selected in config.");
        eprintln!("If you would like to bypass this, run this command with -r or --root.");
        return Ok(1);
    }

    let LoadedConfig { config, overridden } = config::load()?;

    if overridden {
        log_status!("config", "package manager overridden via {}", config::OVERRIDE_ENV_VAR);
    }

    // clap has already consumed pak's own flags; anything hyphen-prefixed
    // left in the trailing list is stripped before resolution.
    let normalized = args::strip_flags(&cli.args);

    let wants_help = cli.help
        || normalized.iter().any(|a| a == "help")
        || normalized.first().is_none_or(|a| a.is_empty());
    if wants_help {
        print!("{}", help::render(&config, overridden));
        return Ok(0);
    }

    let resolution = resolver::resolve(
        &normalized[0],
        &config.commands,
        &config.shortcuts,
        &config.shortcut_mappings,
    )?;

    let command_line = invocation::build_command_line(
        resolution.chosen(),
        &normalized[1..],
        &config.package_manager,
        config.use_root,
        &config.root_command,
    );

    println!(
        "Running: {} using {}{}",
        resolution.chosen().to_title_case(),
        config.package_manager.to_title_case(),
        if overridden { " (overridden)" } else { "" }
    );

    match executor::run_shell(&command_line) {
        Ok(code) => Ok(code),
        Err(err) => {
            eprintln!("Error received from child process");
            Err(err)
        }
    }
}

fn is_root() -> bool {
    // Effective UID, so setuid invocations are caught as well.
    unsafe { libc::geteuid() == 0 }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code < 0 {
        // Signal-terminated children report -1; surface that as a failure.
        1
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
