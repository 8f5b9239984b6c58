use anyhow::Context;
use faraday_seed::core::{dispatcher::report_failure, usage};
use faraday_seed::domain::ports::Confirmer;
use faraday_seed::utils::console::Console;
use faraday_seed::utils::{logger, validation::Validate};
use faraday_seed::{
    AssumeYes, CliArgs, Command, DispatchOptions, Dispatcher, LineConfirmer, ProcessCollaborator,
    SeedConfig,
};
use std::io::{Stdout, Write};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = match CliArgs::parse_from_args(std::env::args_os()) {
        Ok(args) => args,
        // only --version ends up here
        Err(e) => e.exit(),
    };

    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);
    if !args.extra.is_empty() {
        tracing::debug!("Ignoring extra arguments: {:?}", args.extra);
    }

    let command = args.command();
    let mut console = Console::stdout();

    let exit_code = if !command.runs_collaborators() {
        usage::respond(&mut console, &command)
    } else {
        match load_config(&args) {
            Ok(config) => {
                let options = DispatchOptions::from_config(&config, args.dry_run);
                if args.yes {
                    dispatch(&config, AssumeYes, console, options, &command).await
                } else {
                    let confirmer = LineConfirmer::stdin();
                    dispatch(&config, confirmer, console, options, &command).await
                }
            }
            Err(e) => {
                report_failure(&mut console, &e);
                e.exit_code()
            }
        }
    };

    std::io::stdout()
        .flush()
        .context("failed to flush stdout")?;
    tracing::debug!("Exiting with code {}", exit_code);
    std::process::exit(exit_code);
}

fn load_config(args: &CliArgs) -> faraday_seed::Result<SeedConfig> {
    let config = SeedConfig::load(args.config.as_deref())?;
    config.validate()?;
    tracing::debug!("Loaded config: {:?}", config);
    Ok(config)
}

async fn dispatch<C: Confirmer>(
    config: &SeedConfig,
    confirmer: C,
    console: Console<Stdout>,
    options: DispatchOptions,
    command: &Command,
) -> i32 {
    let validator = ProcessCollaborator::new(config.validator.clone());
    let seeder = ProcessCollaborator::new(config.seeder.clone());
    let mut dispatcher = Dispatcher::new(validator, seeder, confirmer, console, options);
    dispatcher.execute(command).await
}
