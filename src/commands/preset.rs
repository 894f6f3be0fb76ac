use anyhow::Result;
use mediacli::client::ApiClient;
use mediacli::output::OutputFormat;
#[cfg(feature = "write")]
use mediacli::params::UploadPresetParams;
use mediacli::results::UploadPreset;
use serde_json::{Map, Value};

#[cfg(feature = "write")]
use crate::cli::{PresetCreateArgs, PresetDeleteArgs, PresetSettingsArgs, PresetUpdateArgs};
use crate::cli::{PresetCommand, PresetGetArgs, PresetListArgs};
use crate::context::{AppContext, load_client};
use crate::helpers::{kv, maybe_print_json, maybe_print_kv, maybe_print_rows, print_line, report_rate_limits};
#[cfg(feature = "write")]
use crate::helpers::{confirm_or_cancel, opt_str, print_dry_run, print_outcome};

pub async fn handle(ctx: &AppContext, cmd: PresetCommand) -> Result<()> {
    let client = load_client()?;
    match cmd {
        PresetCommand::List(args) => preset_list(&client, ctx, args).await,
        PresetCommand::Get(args) => preset_get(&client, ctx, args).await,
        #[cfg(feature = "write")]
        PresetCommand::Create(args) => preset_create(&client, ctx, args).await,
        #[cfg(feature = "write")]
        PresetCommand::Update(args) => preset_update(&client, ctx, args).await,
        #[cfg(feature = "write")]
        PresetCommand::Delete(args) => preset_delete(&client, ctx, args).await,
    }
}

async fn preset_list(client: &ApiClient, ctx: &AppContext, args: PresetListArgs) -> Result<()> {
    let response = client
        .list_upload_presets(args.next_cursor.as_deref(), args.max_results)
        .await?;
    report_rate_limits(ctx, &response.rate_limits);
    let result = response.data;
    match args.output {
        OutputFormat::Json => maybe_print_json(ctx, &result),
        fmt => {
            let rows = result
                .presets
                .iter()
                .map(|preset| {
                    vec![
                        preset.name.clone(),
                        preset.unsigned.to_string(),
                        setting_str(&preset.settings, "folder"),
                        setting_str(&preset.settings, "tags"),
                    ]
                })
                .collect();
            maybe_print_rows(ctx, fmt, &["Name", "Unsigned", "Folder", "Tags"], rows);
            if let Some(cursor) = &result.next_cursor {
                print_line(ctx, &format!("Next cursor: {cursor}"));
            }
            Ok(())
        }
    }
}

async fn preset_get(client: &ApiClient, ctx: &AppContext, args: PresetGetArgs) -> Result<()> {
    let response = client.get_upload_preset(&args.name).await?;
    report_rate_limits(ctx, &response.rate_limits);
    let preset = response.data;
    match args.output {
        OutputFormat::Json => maybe_print_json(ctx, &preset),
        fmt => {
            maybe_print_kv(ctx, fmt, preset_rows(&preset));
            Ok(())
        }
    }
}

fn preset_rows(preset: &UploadPreset) -> Vec<Vec<String>> {
    let mut rows = vec![
        kv("Name", preset.name.clone()),
        kv("Unsigned", preset.unsigned.to_string()),
    ];
    for key in preset.settings.keys() {
        rows.push(kv(key, setting_str(&preset.settings, key)));
    }
    if let Some(eval) = &preset.eval {
        rows.push(kv("Eval", eval.clone()));
    }
    if let Some(on_success) = &preset.on_success {
        rows.push(kv("On success", on_success.clone()));
    }
    rows
}

fn setting_str(settings: &Map<String, Value>, key: &str) -> String {
    match settings.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(other) => other.to_string(),
    }
}

#[cfg(feature = "write")]
fn apply_settings(params: &mut UploadPresetParams, settings: PresetSettingsArgs) {
    params.unsigned = settings.unsigned;
    params.folder = settings.folder;
    params.asset_folder = settings.asset_folder;
    params.public_id_prefix = settings.public_id_prefix;
    params.overwrite = settings.overwrite;
    params.use_filename = settings.use_filename;
    params.unique_filename = settings.unique_filename;
    params.tags = settings.tags;
    params.allowed_formats = settings.allowed_formats;
    params.context = settings.context.into_iter().collect();
    params.metadata = settings.metadata.into_iter().collect();
    params.transformation = settings.transformation;
    params.eager = settings.eager;
    params.eval = settings.eval;
    params.on_success = settings.on_success;
    params.notification_url = settings.notification_url;
}

#[cfg(feature = "write")]
async fn preset_create(client: &ApiClient, ctx: &AppContext, args: PresetCreateArgs) -> Result<()> {
    let mut params = UploadPresetParams {
        name: args.name,
        ..Default::default()
    };
    apply_settings(&mut params, args.settings);

    if ctx.dry_run {
        return print_dry_run(ctx, "create upload preset", &params);
    }

    let response = client.create_upload_preset(&params).await?;
    report_rate_limits(ctx, &response.rate_limits);
    let result = response.data;
    let name = opt_str(result.name.as_deref());
    print_outcome(
        ctx,
        args.output,
        &result,
        vec![kv("Message", result.message.clone()), kv("Name", name.clone())],
        &format!("Created upload preset {name}"),
    )
}

#[cfg(feature = "write")]
async fn preset_update(client: &ApiClient, ctx: &AppContext, args: PresetUpdateArgs) -> Result<()> {
    let mut params = UploadPresetParams::named(&args.name);
    apply_settings(&mut params, args.settings);
    params.live = args.live;

    if ctx.dry_run {
        return print_dry_run(ctx, &format!("update upload preset {}", args.name), &params);
    }

    let response = client.update_upload_preset(&params).await?;
    report_rate_limits(ctx, &response.rate_limits);
    let result = response.data;
    print_outcome(
        ctx,
        args.output,
        &result,
        vec![kv("Message", result.message.clone()), kv("Name", args.name.clone())],
        &format!("Updated upload preset {}", args.name),
    )
}

#[cfg(feature = "write")]
async fn preset_delete(client: &ApiClient, ctx: &AppContext, args: PresetDeleteArgs) -> Result<()> {
    if ctx.dry_run {
        print_line(ctx, &format!("Would delete upload preset {}", args.name));
        return Ok(());
    }
    if !confirm_or_cancel(ctx, args.yes, format!("Delete upload preset {}?", args.name))? {
        return Ok(());
    }
    let response = client.delete_upload_preset(&args.name).await?;
    report_rate_limits(ctx, &response.rate_limits);
    print_line(ctx, &format!("Deleted upload preset {}", args.name));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn setting_str_joins_arrays() {
        let settings = json!({"tags": ["a", "b"], "folder": "f", "overwrite": true, "x": null});
        let settings = settings.as_object().unwrap();
        assert_eq!(setting_str(settings, "tags"), "a,b");
        assert_eq!(setting_str(settings, "folder"), "f");
        assert_eq!(setting_str(settings, "overwrite"), "true");
        assert_eq!(setting_str(settings, "x"), "");
        assert_eq!(setting_str(settings, "missing"), "");
    }
}
