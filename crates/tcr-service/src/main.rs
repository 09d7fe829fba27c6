//! Trigger code reference command-line tool.
//!
//! ```text
//! tcr-stamp <snomed-code>                 print the condition's value sets
//! tcr-stamp <snomed-code> <bundle.json>   stamp the bundle for one condition
//! tcr-stamp --bundle <bundle.json>        stamp every reportable condition in the bundle
//! ```

use tcr_service::{ServiceConfig, TriggerCodeService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: tcr-stamp <snomed-code> [bundle.json] | tcr-stamp --bundle <bundle.json>";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let Some(first) = args.next() else {
        return Err(USAGE.into());
    };
    let (snomed_code, bundle_path) = if first == "--bundle" {
        (None, Some(args.next().ok_or(USAGE)?))
    } else {
        (Some(first), args.next())
    };

    let config = ServiceConfig::from_env();
    let service = TriggerCodeService::load(&config)?;

    let Some(path) = bundle_path else {
        let snomed_code = snomed_code.unwrap_or_default();
        let response = service.get_value_sets(&snomed_code, None);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    };

    tracing::info!("Reading bundle from: {}", path);
    let mut bundle: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;

    match snomed_code {
        Some(snomed_code) => {
            let stamped = service.stamp_condition_extensions(&mut bundle, &snomed_code)?;
            tracing::info!("Stamped {} resources with condition {}", stamped, snomed_code);
        }
        None => {
            for (snomed_code, stamped) in service.stamp_reportable_conditions(&mut bundle)? {
                tracing::info!("Stamped {} resources with condition {}", stamped, snomed_code);
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&bundle)?);

    Ok(())
}
