use anyhow::Context;
use framefind_core::CutPreset;
use framefind_cv::{DetectionResult, ScreenLocator};
use serde::Serialize;

mod crop;

/// What gets printed for the capture pipeline to consume
#[derive(Serialize)]
struct Report {
    source: String,
    #[serde(flatten)]
    detection: DetectionResult,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: framefind <screenshot> [unit|unit-without-ship]");
        std::process::exit(2);
    };
    let preset = match args.next() {
        Some(name) => Some(name.parse::<CutPreset>().map_err(|e| anyhow::anyhow!(e))?),
        None => None,
    };

    let image = image::open(&path)
        .with_context(|| format!("Failed to open screenshot: {path}"))?
        .to_rgb8();

    let detection = ScreenLocator::default().detect_image(&image)?;
    let report = Report {
        source: path.clone(),
        detection,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    match (report.detection.viewport, preset) {
        (Some(viewport), Some(preset)) => {
            let out = crop::save_preset_crop(&image, viewport, preset, path.as_ref())?;
            println!("Saved crop: {}", out.display());
        }
        (None, Some(_)) => {
            eprintln!("No viewport found, nothing to crop");
        }
        _ => {}
    }

    Ok(())
}
