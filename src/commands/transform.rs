use anyhow::Result;
use mediacli::client::ApiClient;
use mediacli::output::OutputFormat;
#[cfg(feature = "write")]
use mediacli::params::{CreateTransformParams, UpdateTransformParams};
use serde_json::Value;

use crate::cli::{TransformCommand, TransformGetArgs};
#[cfg(feature = "write")]
use crate::cli::{TransformCreateArgs, TransformDeleteArgs, TransformUpdateArgs};
use crate::context::{AppContext, load_client};
#[cfg(feature = "write")]
use crate::helpers::{confirm_or_cancel, print_dry_run, print_line, print_outcome};
use crate::helpers::{kv, maybe_print_json, maybe_print_kv, report_rate_limits};

pub async fn handle(ctx: &AppContext, cmd: TransformCommand) -> Result<()> {
    let client = load_client()?;
    match cmd {
        TransformCommand::Get(args) => transform_get(&client, ctx, args).await,
        #[cfg(feature = "write")]
        TransformCommand::Create(args) => transform_create(&client, ctx, args).await,
        #[cfg(feature = "write")]
        TransformCommand::Update(args) => transform_update(&client, ctx, args).await,
        #[cfg(feature = "write")]
        TransformCommand::Delete(args) => transform_delete(&client, ctx, args).await,
    }
}

async fn transform_get(client: &ApiClient, ctx: &AppContext, args: TransformGetArgs) -> Result<()> {
    let response = client.get_transform(&args.transformation).await?;
    report_rate_limits(ctx, &response.rate_limits);
    let result = response.data;
    match args.output {
        OutputFormat::Json => maybe_print_json(ctx, &result),
        fmt => {
            let info = result
                .info
                .iter()
                .map(Value::to_string)
                .collect::<Vec<_>>()
                .join(" / ");
            maybe_print_kv(
                ctx,
                fmt,
                vec![
                    kv("Name", result.name.clone()),
                    kv("Named", result.named.to_string()),
                    kv("Allowed for strict", result.allowed_for_strict.to_string()),
                    kv("Used", result.used.to_string()),
                    kv("Derived", result.derived.len().to_string()),
                    kv("Info", info),
                ],
            );
            Ok(())
        }
    }
}

#[cfg(feature = "write")]
async fn transform_create(
    client: &ApiClient,
    ctx: &AppContext,
    args: TransformCreateArgs,
) -> Result<()> {
    let mut params = CreateTransformParams::new(&args.name, args.transformation);
    params.allowed_for_strict = args.allowed_for_strict;

    if ctx.dry_run {
        return print_dry_run(ctx, &format!("create transformation {}", args.name), &params);
    }

    let response = client.create_transform(&params).await?;
    report_rate_limits(ctx, &response.rate_limits);
    let result = response.data;
    print_outcome(
        ctx,
        args.output,
        &result,
        vec![kv("Message", result.message.clone()), kv("Name", args.name.clone())],
        &format!("Created transformation {}", args.name),
    )
}

#[cfg(feature = "write")]
async fn transform_update(
    client: &ApiClient,
    ctx: &AppContext,
    args: TransformUpdateArgs,
) -> Result<()> {
    let mut params = UpdateTransformParams::new(&args.transformation);
    params.unsafe_update = args.unsafe_update;
    params.allowed_for_strict = args.allowed_for_strict;

    if ctx.dry_run {
        return print_dry_run(
            ctx,
            &format!("update transformation {}", args.transformation),
            &params,
        );
    }

    let response = client.update_transform(&params).await?;
    report_rate_limits(ctx, &response.rate_limits);
    let result = response.data;
    print_outcome(
        ctx,
        args.output,
        &result,
        vec![
            kv("Message", result.message.clone()),
            kv("Transformation", args.transformation.clone()),
        ],
        &format!("Updated transformation {}", args.transformation),
    )
}

#[cfg(feature = "write")]
async fn transform_delete(
    client: &ApiClient,
    ctx: &AppContext,
    args: TransformDeleteArgs,
) -> Result<()> {
    if ctx.dry_run {
        print_line(ctx, &format!("Would delete transformation {}", args.transformation));
        return Ok(());
    }
    if !confirm_or_cancel(
        ctx,
        args.yes,
        format!("Delete transformation {}?", args.transformation),
    )? {
        return Ok(());
    }
    let response = client.delete_transform(&args.transformation).await?;
    report_rate_limits(ctx, &response.rate_limits);
    print_line(ctx, &format!("Deleted transformation {}", args.transformation));
    Ok(())
}
