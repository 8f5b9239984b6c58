use crate::config::SeedConfig;
use crate::core::usage::{self, PROGRAM_NAME};
use crate::domain::model::{Command, Credential};
use crate::domain::ports::{Collaborator, Confirmer};
use crate::utils::console::Console;
use crate::utils::error::{Result, SeedError};
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct DispatchOptions {
    pub dry_run: bool,
    pub question: String,
    pub credentials: Vec<Credential>,
}

impl DispatchOptions {
    pub fn from_config(config: &SeedConfig, dry_run: bool) -> Self {
        Self {
            dry_run,
            question: config.question().to_string(),
            credentials: config.credentials.clone(),
        }
    }
}

/// Routes a [`Command`] to the validator and seeder, strictly in sequence.
pub struct Dispatcher<V, S, C, W>
where
    V: Collaborator,
    S: Collaborator,
    C: Confirmer,
    W: Write,
{
    validator: V,
    seeder: S,
    confirmer: C,
    console: Console<W>,
    options: DispatchOptions,
}

impl<V, S, C, W> Dispatcher<V, S, C, W>
where
    V: Collaborator,
    S: Collaborator,
    C: Confirmer,
    W: Write,
{
    pub fn new(
        validator: V,
        seeder: S,
        confirmer: C,
        console: Console<W>,
        options: DispatchOptions,
    ) -> Self {
        Self {
            validator,
            seeder,
            confirmer,
            console,
            options,
        }
    }

    pub fn console(&self) -> &Console<W> {
        &self.console
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }

    /// Runs `command` and returns the process exit code. Failures are reported
    /// on the console before returning.
    pub async fn execute(&mut self, command: &Command) -> i32 {
        if !command.runs_collaborators() {
            return usage::respond(&mut self.console, command);
        }

        match self.run(command).await {
            Ok(()) => 0,
            Err(e) => {
                report_failure(&mut self.console, &e);
                e.exit_code()
            }
        }
    }

    pub async fn run(&mut self, command: &Command) -> Result<()> {
        if self.options.dry_run {
            return self.dry_run(command);
        }

        match command {
            Command::Test => self.test().await,
            Command::Seed => self.seed().await,
            Command::Unknown(other) => Err(SeedError::UnknownCommand(other.clone())),
            Command::Help | Command::Missing => {
                usage::print_usage(&mut self.console)?;
                Ok(())
            }
        }
    }

    async fn test(&mut self) -> Result<()> {
        self.validate().await?;

        self.console.blank()?;
        self.console.success("🎉 Environment is ready for seeding")?;
        self.console
            .info(&format!("Next step: {} seed", PROGRAM_NAME))?;
        Ok(())
    }

    async fn seed(&mut self) -> Result<()> {
        self.validate().await?;

        self.console.blank()?;
        if !self.confirm()? {
            self.console.warn("Seeding cancelled, nothing was changed")?;
            tracing::info!("Operator declined seeding");
            return Ok(());
        }

        self.console.blank()?;
        self.console.heading("🌱 Seeding database")?;
        self.console
            .info(&format!("Running: {}", self.seeder.describe()))?;
        self.console.flush()?;

        let outcome = self.seeder.run().await?;
        if !outcome.success() {
            return Err(SeedError::SeederFailed {
                code: outcome.exit_code(),
            });
        }

        self.console.blank()?;
        self.console.success("✅ Database seeded successfully")?;
        self.print_credentials()?;
        Ok(())
    }

    async fn validate(&mut self) -> Result<()> {
        self.console.heading("🔍 Validating environment")?;
        self.console
            .info(&format!("Running: {}", self.validator.describe()))?;
        self.console.flush()?;

        let outcome = self.validator.run().await?;
        if !outcome.success() {
            return Err(SeedError::ValidatorFailed {
                code: outcome.exit_code(),
            });
        }

        self.console.success("✅ Validation passed")?;
        Ok(())
    }

    fn confirm(&mut self) -> Result<bool> {
        if !self.confirmer.is_interactive() {
            self.console.info("Confirmation skipped (--yes)")?;
            return self.confirmer.confirm();
        }

        self.console
            .prompt(&format!("{} [y/N]: ", self.options.question))?;
        let confirmed = self.confirmer.confirm()?;
        tracing::debug!("Confirmation answer: {}", confirmed);
        Ok(confirmed)
    }

    fn print_credentials(&mut self) -> Result<()> {
        self.console.blank()?;
        if self.options.credentials.is_empty() {
            self.console
                .info("Login credentials are listed in the seeder summary above")?;
            return Ok(());
        }

        self.console.info("🔑 Demo credentials:")?;
        for credential in &self.options.credentials {
            self.console.plain_line(&format!(
                "  • Username: {} | Password: {}",
                credential.username, credential.password
            ))?;
        }
        Ok(())
    }

    fn dry_run(&mut self, command: &Command) -> Result<()> {
        self.console.heading("🔍 Dry run, nothing will be executed")?;
        match command {
            Command::Test => {
                self.console
                    .plain_line(&format!("Would run: {}", self.validator.describe()))?;
            }
            Command::Seed => {
                self.console
                    .plain_line(&format!("Would run: {}", self.validator.describe()))?;
                self.console
                    .plain_line(&format!("Would ask: {} [y/N]", self.options.question))?;
                self.console
                    .plain_line(&format!("Would run: {}", self.seeder.describe()))?;
            }
            Command::Unknown(other) => return Err(SeedError::UnknownCommand(other.clone())),
            Command::Help | Command::Missing => usage::print_usage(&mut self.console)?,
        }
        Ok(())
    }
}

/// Prints a failure with its remediation hint and records it in the log.
pub fn report_failure<W: Write>(console: &mut Console<W>, err: &SeedError) {
    tracing::error!("❌ {} (exit code {})", err, err.exit_code());
    tracing::error!("💡 Recovery suggestion: {}", err.recovery_suggestion());

    if let Err(e) = write_failure(console, err) {
        tracing::error!("Failed to write to console: {}", e);
    }
}

fn write_failure<W: Write>(console: &mut Console<W>, err: &SeedError) -> std::io::Result<()> {
    console.blank()?;
    console.error(&format!("❌ {}", err.user_friendly_message()))?;
    console.plain_line(&format!("   {}", err))?;
    console.warn(&format!("💡 {}", err.recovery_suggestion()))
}
