use anyhow::Result;
#[cfg(feature = "write")]
use dialoguer::Confirm;
use humansize::{BINARY, format_size};
#[cfg(feature = "write")]
use mediacli::params::Params;
use mediacli::output::{OutputFormat, print_json, print_kv, print_rows};
use mediacli::rate_limit::FeatureRateLimits;
use serde::Serialize;

use crate::context::AppContext;

pub fn maybe_print_json<T: Serialize>(ctx: &AppContext, value: &T) -> Result<()> {
    if ctx.quiet {
        return Ok(());
    }
    print_json(value)
}

pub fn maybe_print_rows(
    ctx: &AppContext,
    format: OutputFormat,
    headers: &[&str],
    rows: Vec<Vec<String>>,
) {
    if ctx.quiet {
        return;
    }
    print_rows(format, headers, rows);
}

pub fn maybe_print_kv(ctx: &AppContext, format: OutputFormat, rows: Vec<Vec<String>>) {
    if ctx.quiet {
        return;
    }
    print_kv(format, rows);
}

pub fn print_line(ctx: &AppContext, message: &str) {
    if ctx.quiet {
        return;
    }
    println!("{message}");
}

/// Reports per-feature rate limits on stderr when running with `-v`.
pub fn report_rate_limits(ctx: &AppContext, limits: &FeatureRateLimits) {
    if ctx.quiet || ctx.verbose == 0 || limits.is_empty() {
        return;
    }
    let count = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_else(|| "?".to_string());
    let reset = limits
        .reset
        .map(|r| r.to_rfc3339())
        .unwrap_or_else(|| "unknown".to_string());
    eprintln!(
        "Rate limit: {}/{} remaining, resets {}",
        count(limits.remaining),
        count(limits.limit),
        reset
    );
}

pub fn kv(field: &str, value: impl Into<String>) -> Vec<String> {
    vec![field.to_string(), value.into()]
}

pub fn opt_str(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

pub fn human_size(bytes: i64) -> String {
    if bytes < 0 {
        return bytes.to_string();
    }
    format_size(bytes as u64, BINARY)
}

/// Ask before a destructive call unless `--yes` was given.
#[cfg(feature = "write")]
pub fn confirm_or_cancel(ctx: &AppContext, yes: bool, prompt: String) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|err| {
            anyhow::anyhow!("{err}. Use --yes to skip confirmation in non-interactive shells.")
        })?;
    if !confirmed {
        print_line(ctx, "Cancelled.");
    }
    Ok(confirmed)
}

/// Validates `params` and prints the flattened request instead of sending it.
#[cfg(feature = "write")]
pub fn print_dry_run<P: Params>(ctx: &AppContext, action: &str, params: &P) -> Result<()> {
    params.check()?;
    let dict = params.to_params_dict()?;
    print_line(ctx, &format!("Would {action}"));
    maybe_print_json(ctx, &dict)
}

/// Prints a mutation result: raw JSON, a field table, or just `message`.
#[cfg(feature = "write")]
pub fn print_outcome<T: Serialize>(
    ctx: &AppContext,
    output: Option<OutputFormat>,
    data: &T,
    rows: Vec<Vec<String>>,
    message: &str,
) -> Result<()> {
    match output {
        Some(OutputFormat::Json) => maybe_print_json(ctx, data),
        Some(fmt) => {
            maybe_print_kv(ctx, fmt, rows);
            Ok(())
        }
        None => {
            print_line(ctx, message);
            Ok(())
        }
    }
}
