use crate::analyzers::RecordAnalyzer;
use crate::cli::args::Cli;
use crate::error::Result;
use crate::processors::ObservationReshaper;
use crate::readers::{CsvObservationReader, ObservationSource};
use crate::settings::Settings;
use crate::utils::progress::ProgressReporter;
use crate::writers::HistogramRenderer;
use tracing::info;

pub fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let input = cli.input_path();
    let output = cli.output_path();
    let unit = cli.unit();
    let hemisphere = cli.hemisphere();

    info!(
        station = %cli.station_id,
        input = %input.display(),
        unit = ?unit,
        hemisphere = ?hemisphere,
        "analyzing station"
    );

    let progress = ProgressReporter::new_spinner("Reading station data...", cli.quiet);
    let source = CsvObservationReader::new(&input);
    let rows = source.observations()?;

    progress.set_message("Reshaping observations...");
    let records = ObservationReshaper::with_unit(unit).reshape(&rows)?;
    progress.finish_with_message(&format!(
        "Read {} rows, {} complete days",
        rows.len(),
        records.len()
    ));

    let description = RecordAnalyzer::new().describe(&records, unit)?;
    println!("{}", description.table());

    let renderer = HistogramRenderer::from_settings(&settings, unit)?.with_hemisphere(hemisphere);
    renderer.render(&records, &cli.station_id, &output)?;

    info!(path = %output.display(), "figure written");
    Ok(())
}
