use ipv4_class_summary::cli::CommandLine;
use ipv4_class_summary::config::{Config, PROMPT};
use ipv4_class_summary::input::{ArgsInput, PromptInput};
use ipv4_class_summary::logging::init_logging;
use ipv4_class_summary::models::class_rules;
use ipv4_class_summary::run_session;
use std::error::Error;
use std::process::ExitCode;

// Do as little as possible in main.rs as it can't contain any tests
fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let commands = CommandLine::parse_args();
    let config = Config::from(&commands);

    if let Err(e) = init_logging(&config.log_config) {
        eprintln!("{e}");
    }
    if !config.colorize {
        colored::control::set_override(false);
    }
    log::info!("#Start main()");

    match run(commands, &config) {
        Ok(code) => code,
        Err(e) => {
            log::error!("Critical failure: {e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(commands: CommandLine, config: &Config) -> Result<ExitCode, Box<dyn Error>> {
    let mut stdout = std::io::stdout();

    if commands.rules {
        print!("{}", class_rules());
        return Ok(ExitCode::SUCCESS);
    }

    if commands.addresses.is_empty() {
        println!("{}", class_rules());
        let mut input = PromptInput::new(std::io::stdin().lock(), std::io::stdout(), PROMPT);
        run_session(&mut input, config, &mut stdout)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut input = ArgsInput::new(commands.addresses);
    let summary = run_session(&mut input, config, &mut stdout)?;
    if summary.failed > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
