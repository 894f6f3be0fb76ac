use anyhow::Result;
use mediacli::client::ApiClient;
use mediacli::output::OutputFormat;
#[cfg(feature = "write")]
use mediacli::params::{
    Representation, StreamingProfileCreateParams, StreamingProfileUpdateParams,
};
use mediacli::results::StreamingProfile;
use serde_json::Value;

#[cfg(feature = "write")]
use crate::cli::{ProfileDeleteArgs, ProfileWriteArgs};
use crate::cli::{ProfileCommand, ProfileGetArgs, ProfileListArgs};
use crate::context::{AppContext, load_client};
#[cfg(feature = "write")]
use crate::helpers::{confirm_or_cancel, print_dry_run, print_line, print_outcome};
use crate::helpers::{kv, maybe_print_json, maybe_print_kv, maybe_print_rows, opt_str, report_rate_limits};

pub async fn handle(ctx: &AppContext, cmd: ProfileCommand) -> Result<()> {
    let client = load_client()?;
    match cmd {
        ProfileCommand::List(args) => profile_list(&client, ctx, args).await,
        ProfileCommand::Get(args) => profile_get(&client, ctx, args).await,
        #[cfg(feature = "write")]
        ProfileCommand::Create(args) => profile_create(&client, ctx, args).await,
        #[cfg(feature = "write")]
        ProfileCommand::Update(args) => profile_update(&client, ctx, args).await,
        #[cfg(feature = "write")]
        ProfileCommand::Delete(args) => profile_delete(&client, ctx, args).await,
    }
}

async fn profile_list(client: &ApiClient, ctx: &AppContext, args: ProfileListArgs) -> Result<()> {
    let response = client.list_streaming_profiles().await?;
    report_rate_limits(ctx, &response.rate_limits);
    let result = response.data;
    match args.output {
        OutputFormat::Json => maybe_print_json(ctx, &result),
        fmt => {
            let rows = result
                .data
                .iter()
                .map(|p| {
                    vec![
                        p.name.clone(),
                        opt_str(p.display_name.as_deref()),
                        p.predefined.to_string(),
                    ]
                })
                .collect();
            maybe_print_rows(ctx, fmt, &["Name", "Display name", "Predefined"], rows);
            Ok(())
        }
    }
}

async fn profile_get(client: &ApiClient, ctx: &AppContext, args: ProfileGetArgs) -> Result<()> {
    let response = client.get_streaming_profile(&args.name).await?;
    report_rate_limits(ctx, &response.rate_limits);
    let profile = response.data.data;
    match args.output {
        OutputFormat::Json => maybe_print_json(ctx, &profile),
        fmt => {
            maybe_print_kv(ctx, fmt, profile_rows(&profile));
            Ok(())
        }
    }
}

fn profile_rows(profile: &StreamingProfile) -> Vec<Vec<String>> {
    let mut rows = vec![
        kv("Name", profile.name.clone()),
        kv("Display name", opt_str(profile.display_name.as_deref())),
        kv("Predefined", profile.predefined.to_string()),
    ];
    for (i, rep) in profile.representations.iter().enumerate() {
        rows.push(kv(
            &format!("Representation {}", i + 1),
            representation_str(&rep.transformation),
        ));
    }
    rows
}

/// Representations come back either as a string or as a list of
/// transformation objects.
fn representation_str(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(components) => components
            .iter()
            .map(|c| match c {
                Value::Object(map) => map
                    .iter()
                    .map(|(k, v)| match v {
                        Value::String(s) => format!("{k}={s}"),
                        other => format!("{k}={other}"),
                    })
                    .collect::<Vec<_>>()
                    .join(","),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("/"),
        other => other.to_string(),
    }
}

#[cfg(feature = "write")]
fn representations(args: &ProfileWriteArgs) -> Vec<Representation> {
    args.representations
        .iter()
        .cloned()
        .map(Representation::new)
        .collect()
}

#[cfg(feature = "write")]
async fn profile_create(client: &ApiClient, ctx: &AppContext, args: ProfileWriteArgs) -> Result<()> {
    let mut params = StreamingProfileCreateParams::new(&args.name, representations(&args));
    params.base.display_name = args.display_name.clone();

    if ctx.dry_run {
        return print_dry_run(ctx, &format!("create streaming profile {}", args.name), &params);
    }

    let response = client.create_streaming_profile(&params).await?;
    report_rate_limits(ctx, &response.rate_limits);
    let result = response.data;
    print_outcome(
        ctx,
        args.output,
        &result,
        profile_rows(&result.data),
        &format!("Created streaming profile {}", args.name),
    )
}

#[cfg(feature = "write")]
async fn profile_update(client: &ApiClient, ctx: &AppContext, args: ProfileWriteArgs) -> Result<()> {
    let params = StreamingProfileUpdateParams {
        display_name: args.display_name.clone(),
        representations: Some(representations(&args)),
    };

    if ctx.dry_run {
        return print_dry_run(ctx, &format!("update streaming profile {}", args.name), &params);
    }

    let response = client.update_streaming_profile(&args.name, &params).await?;
    report_rate_limits(ctx, &response.rate_limits);
    let result = response.data;
    print_outcome(
        ctx,
        args.output,
        &result,
        profile_rows(&result.data),
        &format!("Updated streaming profile {}", args.name),
    )
}

#[cfg(feature = "write")]
async fn profile_delete(client: &ApiClient, ctx: &AppContext, args: ProfileDeleteArgs) -> Result<()> {
    if ctx.dry_run {
        print_line(ctx, &format!("Would delete streaming profile {}", args.name));
        return Ok(());
    }
    if !confirm_or_cancel(ctx, args.yes, format!("Delete streaming profile {}?", args.name))? {
        return Ok(());
    }
    let response = client.delete_streaming_profile(&args.name).await?;
    report_rate_limits(ctx, &response.rate_limits);
    print_line(ctx, &format!("Deleted streaming profile {}", args.name));
    Ok(())
}
