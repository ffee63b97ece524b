use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use tracker_cli::fixture::{ValidationFixture, load_config};
use tracker_cli::logging::redact_value;
use tracker_validate::{ReadDeniedPolicy, ValidationConfig, build_default_pipeline};

use crate::cli::ValidateArgs;
use crate::summary::apply_table_style;
use crate::types::ValidateResult;

/// Print the hooks of the default pipeline in execution order.
pub fn run_hooks() -> Result<()> {
    let (_, services) = ValidationFixture::default().into_parts();
    let pipeline = build_default_pipeline(&services, &ValidationConfig::default());
    let mut table = Table::new();
    table.set_header(vec!["Order", "Hook"]);
    apply_table_style(&mut table);
    for (name, order) in pipeline.hook_orders() {
        table.add_row(vec![order.to_string(), name.to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateResult> {
    let span = info_span!("validate", fixture = %args.fixture.display());
    let _guard = span.enter();

    let config = resolve_config(args)?;
    let fixture = ValidationFixture::from_path(&args.fixture)?;
    let import_strategy = fixture.import_strategy;
    let enrollments = fixture.enrollments.len();
    info!(
        strategy = import_strategy.as_str(),
        enrollments,
        committed = fixture.program_instances.len(),
        "Loaded fixture"
    );
    for enrollment in &fixture.enrollments {
        tracing::trace!(
            enrollment = %enrollment.uid(),
            tracked_entity = redact_value(
                enrollment.tracked_entity_instance.as_deref().unwrap_or_default()
            ),
            "Incoming enrollment"
        );
    }

    let (bundle, services) = fixture.into_parts();
    let pipeline = build_default_pipeline(&services, &config);
    let start = Instant::now();
    let report = pipeline.validate(&bundle).context("validation aborted")?;
    info!(
        errors = report.error_count(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Validation complete"
    );

    Ok(ValidateResult {
        fixture: args.fixture.clone(),
        import_strategy,
        enrollments,
        report,
    })
}

/// Config file first, then command-line switches on top.
fn resolve_config(args: &ValidateArgs) -> Result<ValidationConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ValidationConfig::default(),
    };
    if args.include_deleted {
        config.conflict_check.include_deleted = true;
    }
    if args.skip_read_denied {
        config.conflict_check.read_denied = ReadDeniedPolicy::Skip;
    }
    Ok(config)
}
