mod cli;
mod output;

use std::io::Read;
use std::process::ExitCode;

use tonemark_common::{Result, StyleError};
use tonemark_config::{toml_loader, TonemarkConfig};
use tonemark_webview::{EditorBridge, FieldRoots, Notifier, StylerOptions};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use output::{StderrNotifier, StdoutSurface};

fn main() -> ExitCode {
    let args = cli::parse();

    // Config comes first so its log level can seed the filter.
    let loaded = match &args.config {
        Some(path) => toml_loader::load_from_path(path),
        None => tonemark_config::load_config(),
    };

    let log_directive = match (&args.log_level, &loaded) {
        (Some(level), _) => format!("tonemark={level}"),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => "tonemark=info".to_string(),
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "tonemark=info".parse().unwrap()),
            ),
        )
        .init();

    let config = loaded.unwrap_or_else(|e| {
        warn!("failed to load config: {e}, using defaults");
        TonemarkConfig::default()
    });

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("tonemark: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args, config: &TonemarkConfig) -> Result<()> {
    let version = args
        .host_version
        .as_deref()
        .or(config.host.version.as_deref())
        .ok_or_else(|| {
            StyleError::InvalidVersion(
                "none given; pass --host-version or set [host] version".into(),
            )
        })?;

    let notifier = StderrNotifier;
    let bridge = EditorBridge::from_config(
        version,
        &config.editor,
        styler_options(args, config),
        &notifier,
    );
    info!(
        version,
        tier = ?bridge.styler().tier(),
        enabled = bridge.enabled_note_types().count(),
        "tone styler ready"
    );

    let stylesheet = read_stylesheet(args)?;
    for diagnostic in bridge.styler().apply(&stylesheet, &StdoutSurface).iter() {
        notifier.notify(diagnostic);
    }
    Ok(())
}

fn styler_options(args: &cli::Args, config: &TonemarkConfig) -> StylerOptions {
    let field_roots = if args.roots.is_empty() {
        FieldRoots::Matching(config.editor.field_root_selector.clone())
    } else {
        FieldRoots::Listed(args.roots.clone())
    };
    StylerOptions {
        field_roots,
        style_sheet: config.editor.style_sheet.clone(),
    }
}

fn read_stylesheet(args: &cli::Args) -> Result<String> {
    match &args.css {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut css = String::new();
            std::io::stdin().read_to_string(&mut css)?;
            Ok(css)
        }
    }
}
