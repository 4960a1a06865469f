use ribcut::{
    format_length, init_logging_with, Config, LogFormat, Rib, Wing, BUILD_DATE, BUILD_PROFILE,
    VERSION,
};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let mut format = LogFormat::Pretty;
    let mut config_path: Option<PathBuf> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => format = LogFormat::Json,
            "--version" => {
                println!("ribcut {VERSION} ({BUILD_DATE}, {BUILD_PROFILE})");
                return Ok(());
            }
            _ => config_path = Some(PathBuf::from(arg)),
        }
    }

    // Initialize logging
    init_logging_with(format)?;
    tracing::info!(version = VERSION, build_date = BUILD_DATE, "ribcut starting");

    let config = Config::load_or_default(config_path.as_deref())?;
    let wing = Wing::from_config(&config)?;
    let ribs = wing.build()?;

    for rib in ribs.iter() {
        report(rib, &config);
    }

    let warnings: usize = ribs.iter().map(|r| r.contour.diagnostics().warnings().count()).sum();
    tracing::info!(ribs = ribs.len(), warnings, "done");
    Ok(())
}

fn report(rib: &Rib, config: &Config) {
    let bounds = rib.contour.bounds();
    let outline = rib.contour.outline();
    tracing::info!(
        rib = %rib.label,
        lateral = %format_length(rib.pos[0], config.units),
        sweep = %format_length(rib.pos[1], config.units),
        chord = %format_length(bounds.chord(), config.units),
        height = %format_length(bounds.height(), config.units),
        points = rib.contour.top().len() + rib.contour.bottom().len(),
        regions = outline.len(),
        holes = outline.iter().map(|o| o.holes.len()).sum::<usize>(),
        "rib"
    );
    for diagnostic in rib.contour.diagnostics().entries() {
        tracing::debug!(rib = %rib.label, "{}", diagnostic);
    }
}
