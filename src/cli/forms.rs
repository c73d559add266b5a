//! Interactive entry form for a new transaction.

use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Input, Select};

use frontdesk_domain::{
    parse_calendar_date, PaymentMethod, TransactionCategory, TransactionDraft,
    TransactionSubCategory,
};

use crate::errors::AppError;

/// Prompts for every draft field. Values from `previous` are offered as
/// defaults so a failed submission can be corrected instead of retyped.
pub fn prompt_draft(
    theme: &ColorfulTheme,
    previous: Option<&TransactionDraft>,
) -> Result<TransactionDraft, AppError> {
    let default_date = previous
        .map(|draft| draft.date)
        .unwrap_or_else(|| Local::now().date_naive());
    let date = prompt_date(theme, default_date)?;

    let category = choose(
        theme,
        "Category",
        &TransactionCategory::ALL,
        previous.map(|draft| draft.category),
    )?;
    let sub_category = choose(
        theme,
        "Sub-Category",
        &TransactionSubCategory::ALL,
        previous.map(|draft| draft.sub_category),
    )?;
    let method = choose(
        theme,
        "Payment Method",
        &PaymentMethod::ALL,
        previous.map(|draft| draft.method),
    )?;

    let description = required_text(
        theme,
        "Description",
        previous.map(|draft| draft.description.as_str()),
    )?;
    // Numeric coercion happens on submit so a bad amount is reported there.
    let amount = required_text(theme, "Amount", previous.map(|draft| draft.amount.as_str()))?;

    Ok(TransactionDraft::new(
        date,
        category,
        sub_category,
        method,
        description,
        amount,
    ))
}

fn prompt_date(theme: &ColorfulTheme, default: NaiveDate) -> Result<NaiveDate, AppError> {
    let raw = Input::<String>::with_theme(theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .default(default.format("%Y-%m-%d").to_string())
        .validate_with(|input: &String| -> Result<(), &str> {
            parse_calendar_date(input)
                .map(|_| ())
                .ok_or("Enter a date as YYYY-MM-DD")
        })
        .interact_text()?;
    parse_calendar_date(&raw).ok_or_else(|| AppError::Usage(format!("invalid date `{raw}`")))
}

fn choose<T>(
    theme: &ColorfulTheme,
    prompt: &str,
    options: &[T],
    current: Option<T>,
) -> Result<T, AppError>
where
    T: Copy + PartialEq + ToString,
{
    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
    let default = current
        .and_then(|value| options.iter().position(|option| *option == value))
        .unwrap_or(0);
    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(options[index])
}

fn required_text(
    theme: &ColorfulTheme,
    prompt: &str,
    current: Option<&str>,
) -> Result<String, AppError> {
    let mut input = Input::<String>::with_theme(theme).with_prompt(prompt);
    if let Some(value) = current {
        input = input.default(value.to_string());
    }
    let value = input
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("This field is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value)
}
