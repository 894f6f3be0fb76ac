use anyhow::Result;
use mediacli::client::ApiClient;
use mediacli::output::OutputFormat;
use mediacli::params::UploadMappingParams;

#[cfg(feature = "write")]
use crate::cli::{MappingDeleteArgs, MappingWriteArgs};
use crate::cli::{MappingCommand, MappingGetArgs, MappingListArgs};
use crate::context::{AppContext, load_client};
use crate::helpers::{kv, maybe_print_json, maybe_print_kv, maybe_print_rows, print_line, report_rate_limits};
#[cfg(feature = "write")]
use crate::helpers::{confirm_or_cancel, print_dry_run, print_outcome};

pub async fn handle(ctx: &AppContext, cmd: MappingCommand) -> Result<()> {
    let client = load_client()?;
    match cmd {
        MappingCommand::List(args) => mapping_list(&client, ctx, args).await,
        MappingCommand::Get(args) => mapping_get(&client, ctx, args).await,
        #[cfg(feature = "write")]
        MappingCommand::Create(args) => mapping_write(&client, ctx, args, false).await,
        #[cfg(feature = "write")]
        MappingCommand::Update(args) => mapping_write(&client, ctx, args, true).await,
        #[cfg(feature = "write")]
        MappingCommand::Delete(args) => mapping_delete(&client, ctx, args).await,
    }
}

async fn mapping_list(client: &ApiClient, ctx: &AppContext, args: MappingListArgs) -> Result<()> {
    let params = UploadMappingParams {
        max_results: args.max_results,
        next_cursor: args.next_cursor,
        ..Default::default()
    };
    let response = client.list_upload_mappings(&params).await?;
    report_rate_limits(ctx, &response.rate_limits);
    let result = response.data;
    match args.output {
        OutputFormat::Json => maybe_print_json(ctx, &result),
        fmt => {
            let rows = result
                .mappings
                .iter()
                .map(|m| vec![m.folder.clone(), m.template.clone()])
                .collect();
            maybe_print_rows(ctx, fmt, &["Folder", "Template"], rows);
            if let Some(cursor) = &result.next_cursor {
                print_line(ctx, &format!("Next cursor: {cursor}"));
            }
            Ok(())
        }
    }
}

async fn mapping_get(client: &ApiClient, ctx: &AppContext, args: MappingGetArgs) -> Result<()> {
    let response = client.get_upload_mapping(&args.folder).await?;
    report_rate_limits(ctx, &response.rate_limits);
    let mapping = response.data;
    match args.output {
        OutputFormat::Json => maybe_print_json(ctx, &mapping),
        fmt => {
            maybe_print_kv(
                ctx,
                fmt,
                vec![
                    kv("Folder", mapping.folder.clone()),
                    kv("Template", mapping.template.clone()),
                ],
            );
            Ok(())
        }
    }
}

#[cfg(feature = "write")]
async fn mapping_write(
    client: &ApiClient,
    ctx: &AppContext,
    args: MappingWriteArgs,
    update: bool,
) -> Result<()> {
    let params = UploadMappingParams::new(&args.folder, &args.template);
    let verb = if update { "update" } else { "create" };

    if ctx.dry_run {
        params.check_mapping()?;
        return print_dry_run(ctx, &format!("{verb} upload mapping {}", args.folder), &params);
    }

    let response = if update {
        client.update_upload_mapping(&params).await?
    } else {
        client.create_upload_mapping(&params).await?
    };
    report_rate_limits(ctx, &response.rate_limits);
    let result = response.data;
    let done = if update { "Updated" } else { "Created" };
    print_outcome(
        ctx,
        args.output,
        &result,
        vec![
            kv("Message", result.message.clone()),
            kv("Folder", args.folder.clone()),
            kv("Template", args.template.clone()),
        ],
        &format!("{done} upload mapping {} -> {}", args.folder, args.template),
    )
}

#[cfg(feature = "write")]
async fn mapping_delete(client: &ApiClient, ctx: &AppContext, args: MappingDeleteArgs) -> Result<()> {
    if ctx.dry_run {
        print_line(ctx, &format!("Would delete upload mapping {}", args.folder));
        return Ok(());
    }
    if !confirm_or_cancel(ctx, args.yes, format!("Delete upload mapping {}?", args.folder))? {
        return Ok(());
    }
    let response = client.delete_upload_mapping(&args.folder).await?;
    report_rate_limits(ctx, &response.rate_limits);
    print_line(ctx, &format!("Deleted upload mapping {}", args.folder));
    Ok(())
}
