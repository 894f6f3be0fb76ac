use anyhow::Result;
use mediacli::client::ApiClient;
use mediacli::output::OutputFormat;
use mediacli::params::GetResourceParams;
#[cfg(feature = "write")]
use mediacli::params::{DelDerivedResParams, DelResParams, RestoreParams, UpdateParams};
use mediacli::results::Resource;
use serde_json::Value;

#[cfg(feature = "write")]
use crate::cli::AssetTypeArgs;
use crate::cli::{ResourceCommand, ResourceGetArgs};
#[cfg(feature = "write")]
use crate::cli::{
    ResourceDeleteArgs, ResourceDeleteDerivedArgs, ResourceRestoreArgs, ResourceUpdateArgs,
};
use crate::context::{AppContext, load_client};
#[cfg(feature = "write")]
use crate::helpers::{confirm_or_cancel, print_dry_run, print_line, print_outcome};
use crate::helpers::{human_size, kv, maybe_print_json, maybe_print_kv, opt_str, report_rate_limits};

pub async fn handle(ctx: &AppContext, cmd: ResourceCommand) -> Result<()> {
    let client = load_client()?;
    match cmd {
        ResourceCommand::Get(args) => resource_get(&client, ctx, args).await,
        #[cfg(feature = "write")]
        ResourceCommand::Update(args) => resource_update(&client, ctx, args).await,
        #[cfg(feature = "write")]
        ResourceCommand::Delete(args) => resource_delete(&client, ctx, args).await,
        #[cfg(feature = "write")]
        ResourceCommand::DeleteDerived(args) => resource_delete_derived(&client, ctx, args).await,
        #[cfg(feature = "write")]
        ResourceCommand::Restore(args) => resource_restore(&client, ctx, args).await,
    }
}

fn flag(enabled: bool) -> Option<bool> {
    enabled.then_some(true)
}

#[cfg(feature = "write")]
fn location(asset: &AssetTypeArgs) -> String {
    format!("{}/{}", asset.resource_type, asset.delivery_type)
}

async fn resource_get(client: &ApiClient, ctx: &AppContext, args: ResourceGetArgs) -> Result<()> {
    let mut params = GetResourceParams::new(&args.public_id);
    params.resource_type = args.asset.resource_type;
    params.r#type = args.asset.delivery_type;
    params.colors = flag(args.colors);
    params.faces = flag(args.faces);
    params.image_metadata = flag(args.image_metadata);
    params.phash = flag(args.phash);
    params.versions = flag(args.versions);
    params.quality_analysis = flag(args.quality_analysis);
    params.cinemagraph_analysis = flag(args.cinemagraph_analysis);
    params.max_results = args.max_results;

    let response = client.get_resource(&params).await?;
    report_rate_limits(ctx, &response.rate_limits);
    let resource = response.data;
    match args.output {
        OutputFormat::Json => maybe_print_json(ctx, &resource),
        fmt => {
            maybe_print_kv(ctx, fmt, resource_rows(&resource));
            Ok(())
        }
    }
}

fn resource_rows(resource: &Resource) -> Vec<Vec<String>> {
    let dimensions = match (resource.width, resource.height) {
        (Some(w), Some(h)) => format!("{w}x{h}"),
        _ => String::new(),
    };
    let mut rows = vec![
        kv("Public ID", resource.public_id.clone()),
        kv("Asset ID", opt_str(resource.asset_id.as_deref())),
        kv("Resource type", opt_str(resource.resource_type.as_deref())),
        kv("Type", opt_str(resource.r#type.as_deref())),
        kv("Format", opt_str(resource.format.as_deref())),
        kv(
            "Version",
            resource.version.map(|v| v.to_string()).unwrap_or_default(),
        ),
        kv("Size", resource.bytes.map(human_size).unwrap_or_default()),
        kv("Dimensions", dimensions),
        kv("Display name", opt_str(resource.display_name.as_deref())),
        kv("Asset folder", opt_str(resource.asset_folder.as_deref())),
        kv("Created", opt_str(resource.created_at.as_deref())),
        kv("Tags", resource.tags.join(",")),
        kv("URL", opt_str(resource.secure_url.as_deref())),
    ];
    for key in ["context", "metadata", "colors", "faces", "phash"] {
        if let Some(value) = resource.extra.get(key).filter(|v| !v.is_null()) {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            rows.push(kv(key, text));
        }
    }
    rows
}

#[cfg(feature = "write")]
async fn resource_update(
    client: &ApiClient,
    ctx: &AppContext,
    args: ResourceUpdateArgs,
) -> Result<()> {
    let mut params = UpdateParams::new(&args.public_id);
    params.resource_type = args.asset.resource_type;
    params.r#type = args.asset.delivery_type;
    params.tags = args.tags;
    params.context = args.context.into_iter().collect();
    params.metadata = args.metadata.into_iter().collect();
    params.clear_invalid = flag(args.clear_invalid);
    params.display_name = args.display_name;
    params.asset_folder = args.asset_folder;
    params.moderation_status = args.moderation_status;

    if ctx.dry_run {
        return print_dry_run(ctx, &format!("update asset {}", args.public_id), &params);
    }

    let response = client.update_resource(&params).await?;
    report_rate_limits(ctx, &response.rate_limits);
    let resource = response.data;
    print_outcome(
        ctx,
        args.output,
        &resource,
        resource_rows(&resource),
        &format!("Updated asset {}", args.public_id),
    )
}

#[cfg(feature = "write")]
async fn resource_delete(
    client: &ApiClient,
    ctx: &AppContext,
    args: ResourceDeleteArgs,
) -> Result<()> {
    let target = location(&args.asset);
    let params = DelResParams {
        resource_type: args.asset.resource_type,
        r#type: args.asset.delivery_type,
        public_ids: args.public_ids,
        prefix: args.prefix,
        tag: args.tag,
        all: flag(args.all),
        keep_original: flag(args.keep_original),
        invalidate: flag(args.invalidate),
        next_cursor: None,
    };

    let description = if let Some(tag) = &params.tag {
        format!("every {target} asset tagged {tag}")
    } else if let Some(prefix) = &params.prefix {
        format!("every {target} asset under prefix {prefix}")
    } else if params.all == Some(true) {
        format!("every {target} asset")
    } else {
        format!("{} {target} asset(s)", params.public_ids.len())
    };

    if ctx.dry_run {
        return print_dry_run(ctx, &format!("delete {description}"), &params);
    }
    if !confirm_or_cancel(ctx, args.yes, format!("Delete {description}?"))? {
        return Ok(());
    }

    let response = client.delete_resources(&params).await?;
    report_rate_limits(ctx, &response.rate_limits);
    let result = response.data;
    let mut rows: Vec<Vec<String>> = result
        .deleted
        .iter()
        .map(|(id, status)| kv(id, status.clone()))
        .collect();
    if result.partial {
        rows.push(kv("Partial", "true"));
    }
    if let Some(cursor) = &result.next_cursor {
        rows.push(kv("Next cursor", cursor.clone()));
    }
    let mut message = format!("Deleted {} asset(s)", result.deleted.len());
    if result.partial {
        message.push_str(" (partial, run again to continue)");
    }
    print_outcome(ctx, args.output, &result, rows, &message)
}

#[cfg(feature = "write")]
async fn resource_delete_derived(
    client: &ApiClient,
    ctx: &AppContext,
    args: ResourceDeleteDerivedArgs,
) -> Result<()> {
    let params = DelDerivedResParams {
        resource_type: args.asset.resource_type,
        r#type: args.asset.delivery_type,
        derived_resources: (!args.derived_ids.is_empty()).then_some(args.derived_ids),
        transformations: (!args.transformation.is_empty()).then_some(args.transformation),
        public_id: args.public_id,
        invalidate: flag(args.invalidate),
    };

    if ctx.dry_run {
        return print_dry_run(ctx, "delete derived assets", &params);
    }
    if !confirm_or_cancel(ctx, args.yes, "Delete derived assets?".to_string())? {
        return Ok(());
    }

    let response = client.delete_derived_resources(&params).await?;
    report_rate_limits(ctx, &response.rate_limits);
    let result = response.data;
    let rows = result
        .deleted
        .iter()
        .map(|(id, status)| kv(id, status.to_string()))
        .collect();
    print_outcome(
        ctx,
        args.output,
        &result,
        rows,
        &format!("Deleted {} derived asset(s)", result.deleted.len()),
    )
}

#[cfg(feature = "write")]
async fn resource_restore(
    client: &ApiClient,
    ctx: &AppContext,
    args: ResourceRestoreArgs,
) -> Result<()> {
    let params = RestoreParams {
        resource_type: args.asset.resource_type,
        r#type: args.asset.delivery_type,
        public_ids: args.public_ids,
        versions: args.versions,
    };

    if ctx.dry_run {
        return print_dry_run(ctx, "restore assets", &params);
    }

    let response = client.restore(&params).await?;
    report_rate_limits(ctx, &response.rate_limits);
    let result = response.data;
    let rows = result
        .restored
        .iter()
        .map(|(id, value)| {
            let status = value
                .get("error")
                .map(|e| format!("error: {e}"))
                .unwrap_or_else(|| "restored".to_string());
            kv(id, status)
        })
        .collect();
    print_outcome(
        ctx,
        args.output,
        &result,
        rows,
        &format!("Restored {} asset(s)", result.restored.len()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resource_rows_include_size_and_dimensions() {
        let resource: Resource = serde_json::from_value(json!({
            "public_id": "samples/cat",
            "bytes": 2048,
            "width": 640,
            "height": 480,
            "tags": ["a", "b"],
            "colors": [["#fff", 90.0]]
        }))
        .unwrap();
        let rows = resource_rows(&resource);
        assert!(rows.contains(&kv("Size", "2 KiB")));
        assert!(rows.contains(&kv("Dimensions", "640x480")));
        assert!(rows.contains(&kv("Tags", "a,b")));
        assert!(rows.contains(&kv("colors", "[[\"#fff\",90.0]]")));
    }

    #[test]
    fn flag_is_only_sent_when_enabled() {
        assert_eq!(flag(true), Some(true));
        assert_eq!(flag(false), None);
    }
}
