use std::io::{self, Write};

use chrono::{DateTime, FixedOffset};

use crate::modules::system::ServiceResponse;

/// Log timestamps are shown in Korea Standard Time, which has no DST.
const DISPLAY_OFFSET_SECONDS: i32 = 9 * 3600;
pub(crate) const DISPLAY_ZONE: &str = "KST";
pub(crate) const INVALID_TIMESTAMP: &str = "Invalid timestamp";

pub(crate) fn print_response(response: &ServiceResponse) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_response(&mut out, response)?;
    out.flush()?;
    Ok(())
}

pub(crate) fn print_auth_logs(response: &ServiceResponse) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_auth_logs(&mut out, response)?;
    out.flush()?;
    Ok(())
}

pub(crate) fn render_response(out: &mut impl Write, response: &ServiceResponse) -> io::Result<()> {
    if let Some(message) = response.message() {
        writeln!(out, "Response: {message}")?;
    }

    let users = response.users();
    if !users.is_empty() {
        writeln!(out, "Users:")?;
        for user in users {
            writeln!(out, "\t{}", user.user_id)?;
        }
    }
    Ok(())
}

pub(crate) fn render_auth_logs(
    out: &mut impl Write,
    response: &ServiceResponse,
) -> io::Result<()> {
    if let Some(message) = response.message() {
        writeln!(out, "Response: {message}")?;
    }

    let logs = response.logs();
    if logs.is_empty() {
        writeln!(out, "No logs found.")?;
        return Ok(());
    }

    writeln!(out, "Auth Logs:")?;
    for log in logs {
        writeln!(out, "\tUserID: {}", log.user_id)?;
        writeln!(out, "\tMessage: {}", log.message)?;
        writeln!(
            out,
            "\tTimestamp ({DISPLAY_ZONE}): {}",
            format_timestamp(&log.timestamp)
        )?;
        writeln!(out, "\tDeviceID: {}", log.device_id)?;
        writeln!(out, "\tSuccess: {}", log.success)?;
        writeln!(out, "\tIP: {}", log.ip)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Converts a unix-epoch seconds string to display time.
pub(crate) fn format_timestamp(raw: &str) -> String {
    let Ok(seconds) = raw.parse::<i64>() else {
        return INVALID_TIMESTAMP.to_string();
    };
    let Some(offset) = FixedOffset::east_opt(DISPLAY_OFFSET_SECONDS) else {
        return INVALID_TIMESTAMP.to_string();
    };
    match DateTime::from_timestamp(seconds, 0) {
        Some(instant) => format!(
            "{} {DISPLAY_ZONE}",
            instant.with_timezone(&offset).format("%Y-%m-%d %H:%M:%S")
        ),
        None => INVALID_TIMESTAMP.to_string(),
    }
}
