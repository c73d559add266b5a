//! Command-line front end: `summary`, `record` and `config`.

pub mod forms;
pub mod output;
pub mod render;

use std::{fs, path::Path};

use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::debug;

use frontdesk_config::{Config, ConfigManager};
use frontdesk_core::{
    CoreError, SubmitContext, SummaryService, TransactionGateway, TransactionRecorder,
};
use frontdesk_domain::{BookingSnapshot, Displayable, UserRole};

use crate::errors::AppError;
use crate::graphql::GraphQlTransactionGateway;
use output::CliNotifier;

const USAGE: &str = "Usage: frontdesk_cli <command>\n\
     Commands:\n  \
     summary <booking.json> [--role admin|staff]\n  \
     record <booking.json>\n  \
     config";

/// Entry point used by the `frontdesk_cli` binary.
pub fn run_cli(args: &[String]) -> Result<(), AppError> {
    let manager = ConfigManager::from_env()?;
    let config = manager.load()?;
    output::set_color_enabled(config.ui_color_enabled);

    let command = args.first().map(String::as_str);
    match command {
        Some("summary") => {
            let path = required_arg(args, 1)?;
            let config = apply_role_flag(config, &args[2..])?;
            let booking = load_booking(Path::new(path))?;
            let view = SummaryService::project(booking.lines(), &config.session);
            print!("{}", render::render_summary(&view, None));
            Ok(())
        }
        Some("record") => {
            let path = required_arg(args, 1)?;
            let booking = load_booking(Path::new(path))?;
            let gateway = GraphQlTransactionGateway::from_config(&config)?;
            debug!(endpoint = gateway.endpoint(), "recording against API");
            record(&config, &booking, gateway)
        }
        Some("config") => {
            output::info(manager.config_path().display());
            println!("{}", serde_json::to_string_pretty(&redacted(config))?);
            Ok(())
        }
        _ => Err(AppError::Usage(USAGE.into())),
    }
}

fn redacted(mut config: Config) -> Config {
    if config.auth_token.is_some() {
        config.auth_token = Some("***".into());
    }
    config
}

fn required_arg(args: &[String], index: usize) -> Result<&str, AppError> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| AppError::Usage(USAGE.into()))
}

fn apply_role_flag(mut config: Config, rest: &[String]) -> Result<Config, AppError> {
    match rest {
        [] => Ok(config),
        [flag, role] if flag == "--role" => {
            config.session.role = match role.to_ascii_lowercase().as_str() {
                "admin" => UserRole::Admin,
                "staff" => UserRole::Staff,
                other => return Err(AppError::Usage(format!("unknown role `{other}`"))),
            };
            Ok(config)
        }
        _ => Err(AppError::Usage(USAGE.into())),
    }
}

/// Reads a booking snapshot as handed over by the booking-creation flow.
pub fn load_booking(path: &Path) -> Result<BookingSnapshot, AppError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn record<G: TransactionGateway>(
    config: &Config,
    booking: &BookingSnapshot,
    gateway: G,
) -> Result<(), AppError> {
    let view = SummaryService::project(booking.lines(), &config.session);
    print!("{}", render::render_summary(&view, None));

    let context = SubmitContext::new(
        booking.booking_id.clone(),
        booking.contact_id.clone(),
        config.session.acting_hotel_id(),
    );
    let theme = ColorfulTheme::default();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let mut recorder = TransactionRecorder::with_notifier(gateway, CliNotifier);

    recorder.open_entry();
    output::section("New Transaction");
    loop {
        let draft = forms::prompt_draft(&theme, recorder.draft())?;
        match runtime.block_on(recorder.submit(draft, &context)) {
            Ok(recorded) => {
                debug!(transaction = %recorded.display_label(), "receipt ready");
                let receipt = SummaryService::receipt(&recorded);
                print!("{}", render::render_summary(&view, Some(&receipt)));
                if !config.session.is_elevated() {
                    output::section("Transaction");
                    print!("{}", render::render_receipt(&receipt));
                }
                return Ok(());
            }
            Err(CoreError::InvalidTransition { .. }) => {
                return Err(AppError::Usage("entry form is not open".into()));
            }
            Err(_) => {
                let retry = Confirm::with_theme(&theme)
                    .with_prompt("Try again?")
                    .default(true)
                    .interact()?;
                if !retry {
                    recorder.cancel_entry()?;
                    output::warning("Transaction discarded.");
                    return Ok(());
                }
            }
        }
    }
}
