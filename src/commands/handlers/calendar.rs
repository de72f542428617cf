//! Date-driven handlers: upcoming birthdays and public holidays.

use super::Params;
use crate::commands::output::CommandOutput;
use crate::contacts::DATE_FORMAT;
use crate::error::{HandlerError, HandlerResult};
use crate::session::Session;

fn parse_days(raw: &str) -> HandlerResult<u32> {
    raw.trim().parse::<u32>().map_err(|e| {
        HandlerError::invalid_value(format!(
            "'{raw}' is not a number of days ({e})"
        ))
    })
}

/// Handle birthday: contacts whose birthday falls within the next N days.
pub fn birthday(session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    let days = parse_days(params.required(0, "days")?)?;
    let rows: Vec<Vec<String>> = session
        .contacts
        .upcoming_birthdays(session.today(), days)?
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday?;
            Some(vec![record.name.clone(), birthday.to_string()])
        })
        .collect();

    if rows.is_empty() {
        return Ok(CommandOutput::info("No results"));
    }
    Ok(CommandOutput::table_with(&["Name", "Birthday"], rows))
}

/// Handle holiday: today's holiday, or every holiday in the next N days.
pub fn holiday(session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    let days = params.optional(0).map(parse_days).transpose()?.unwrap_or(0);
    let today = session.today();

    if days == 0 {
        return Ok(CommandOutput::info(
            session
                .holidays
                .holiday_on(today)
                .unwrap_or_else(|| "No holiday today".to_string()),
        ));
    }

    let rows: Vec<Vec<String>> = session
        .holidays
        .holidays_between(today, days)?
        .into_iter()
        .map(|(date, name)| vec![date.format(DATE_FORMAT).to_string(), name])
        .collect();

    if rows.is_empty() {
        return Ok(CommandOutput::info("No holiday in period"));
    }
    Ok(CommandOutput::table_with(&["Date", "Name"], rows))
}
