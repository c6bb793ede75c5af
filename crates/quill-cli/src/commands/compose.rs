//! Compose command implementation.

use std::path::{Path, PathBuf};

use quill_compose::{
    BundlerConfig, ClientVariant, Extensions, ModernVariant, compose, compose_variants,
};
use quill_config::{BuildContext, validate_schema};

use crate::cli::{ComposeArgs, VariantArg};
use crate::config::{LoadOptions, cli_overrides, load_context};
use crate::error::{Result, ResultExt};
use crate::resolve::extensions_for;
use crate::ui;

/// Execute the compose command.
///
/// Loads the layered build context, validates it, composes the selected
/// variants and writes them to `--out` or prints them to stdout as a JSON
/// array.
pub async fn execute(args: ComposeArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let context = load_context(&LoadOptions {
        cwd: cwd.clone(),
        config: args.config.clone(),
        profile: args.profile.clone(),
        overrides: cli_overrides(args.dev, args.analyze, args.modern),
    })?;
    validate_schema(&context)?;

    let extensions = extensions_for(&context, &cwd);
    let configs = compose_selected(args.variant, &context, &extensions);
    tracing::info!(
        mode = %context.mode,
        variants = configs.len(),
        "composed bundler configurations"
    );

    match &args.out {
        Some(out) => {
            let out = if out.is_absolute() { out.clone() } else { cwd.join(out) };
            for path in write_configs(&out, &configs).await? {
                ui::success(&format!("Wrote {}", path.display()));
            }
        }
        None => println!("{}", serde_json::to_string_pretty(&configs)?),
    }

    Ok(())
}

/// Compose the variants selected on the command line
pub fn compose_selected(
    variant: VariantArg,
    context: &BuildContext,
    extensions: &Extensions,
) -> Vec<BundlerConfig> {
    match variant {
        VariantArg::Client => vec![compose(&ClientVariant::new(), context, extensions)],
        VariantArg::Modern => vec![compose(&ModernVariant::new(), context, extensions)],
        VariantArg::All => compose_variants(context, extensions),
    }
}

/// Write `<dir>/<variant>.config.json` for every config
pub async fn write_configs(dir: &Path, configs: &[BundlerConfig]) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir).await.with_path(dir)?;

    let mut written = Vec::with_capacity(configs.len());
    for config in configs {
        let path = dir.join(format!("{}.config.json", config.name));
        let mut json = config.to_json_pretty()?;
        json.push('\n');
        tokio::fs::write(&path, json).await.with_path(&path)?;
        written.push(path);
    }
    Ok(written)
}
