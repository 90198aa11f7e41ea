use std::{env, path::PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendwise_config::{Config, ConfigError, ConfigManager};
use spendwise_core::{AdmissionPolicy, Clock, CoreError, FixedClock, Rejection, SystemClock};
use spendwise_domain::{Ledger, ParseEnumError};
use tracing::debug;
use uuid::Uuid;

use crate::cli::commands;
use crate::cli::formatters::CliFormatters;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::errors::SpendwiseError;
use crate::utils::persistence::{load_ledger_from_file, save_ledger_to_file};

pub const LEDGER_ENV: &str = "SPENDWISE_LEDGER";
pub const HOME_ENV: &str = "SPENDWISE_HOME";
pub const TODAY_ENV: &str = "SPENDWISE_TODAY";

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unknown command `{0}`. Run `help` to list commands.")]
    UnknownCommand(String),
    #[error("Payment rejected: {0}")]
    PaymentRejected(Box<Rejection>),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] SpendwiseError),
}

impl From<ParseEnumError> for CommandError {
    fn from(err: ParseEnumError) -> Self {
        CommandError::InvalidArguments(err.to_string())
    }
}

/// Everything a command handler may touch during one invocation.
pub struct CliContext {
    pub ledger: Ledger,
    pub ledger_path: PathBuf,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub clock: Box<dyn Clock>,
    pub formatters: CliFormatters,
    pub registry: CommandRegistry,
    dirty: bool,
}

impl CliContext {
    pub fn new(
        ledger: Ledger,
        ledger_path: PathBuf,
        config_manager: ConfigManager,
        config: Config,
        clock: Box<dyn Clock>,
    ) -> Self {
        let formatters = CliFormatters::new(&config);
        Self {
            ledger,
            ledger_path,
            config,
            config_manager,
            clock,
            formatters,
            registry: CommandRegistry::with_entries(commands::all_entries()),
            dirty: false,
        }
    }

    /// Builds the context from the process environment: configuration from
    /// `SPENDWISE_HOME`, the ledger from `SPENDWISE_LEDGER` and the clock from
    /// `SPENDWISE_TODAY`.
    pub fn from_env() -> Result<Self, CommandError> {
        let home = env::var_os(HOME_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(Config::default_base_dir);
        let config_manager = ConfigManager::with_base_dir(home.clone())?;
        let config = config_manager.load()?;
        let ledger_path = env::var_os(LEDGER_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| config.resolve_ledger_path(&home));
        let clock: Box<dyn Clock> = match env::var(TODAY_ENV) {
            Ok(value) if !value.trim().is_empty() => Box::new(FixedClock::new(
                parse_date(value.trim()).map_err(|_| {
                    CommandError::InvalidArguments(format!(
                        "{} must be a YYYY-MM-DD date, got `{}`",
                        TODAY_ENV, value
                    ))
                })?,
            )),
            _ => Box::new(SystemClock),
        };
        debug!(ledger = %ledger_path.display(), home = %home.display(), "loading context");
        let ledger = load_ledger_from_file(&ledger_path)?;
        Ok(Self::new(ledger, ledger_path, config_manager, config, clock))
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn admission_policy(&self) -> AdmissionPolicy {
        AdmissionPolicy::new(self.config.admission.gated_periods.clone())
    }

    /// Writes the current configuration and refreshes the formatters built from it.
    pub fn save_config(&mut self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        self.formatters = CliFormatters::new(&self.config);
        debug!(path = %self.config_manager.config_path().display(), "configuration saved");
        Ok(())
    }

    /// Flags the ledger for saving once the command completes.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn persist(&mut self) -> Result<(), CommandError> {
        if self.dirty {
            save_ledger_to_file(&self.ledger, &self.ledger_path)?;
            self.dirty = false;
        }
        Ok(())
    }
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

pub(crate) fn parse_amount(input: &str) -> Result<Decimal, CommandError> {
    input
        .parse::<Decimal>()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid amount `{}`", input)))
}

/// Resolves a full id or a unique prefix of one against `ids`.
pub(crate) fn resolve_id(
    input: &str,
    ids: impl IntoIterator<Item = Uuid>,
) -> Result<Uuid, CommandError> {
    if let Ok(id) = Uuid::parse_str(input) {
        return Ok(id);
    }
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Err(CommandError::InvalidArguments("an id is required".into()));
    }
    let matches: Vec<Uuid> = ids
        .into_iter()
        .filter(|id| id.simple().to_string().starts_with(&needle))
        .collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(CommandError::InvalidArguments(format!(
            "no record matches id `{}`",
            input
        ))),
        _ => Err(CommandError::InvalidArguments(format!(
            "id `{}` is ambiguous, use more characters",
            input
        ))),
    }
}

pub(crate) fn short_id(id: Uuid) -> String {
    let mut short = id.simple().to_string();
    short.truncate(8);
    short
}

pub(crate) fn require_args(args: &[&str], count: usize, usage: &str) -> CommandResult {
    if args.len() < count {
        return Err(CommandError::InvalidArguments(format!("usage: {}", usage)));
    }
    Ok(())
}
