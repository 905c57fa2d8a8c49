//!
//! The MST benchmark analyzer binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    let configuration = mst_benchmark_analyzer::Configuration::try_from(arguments)?;

    let ingested = mst_benchmark_analyzer::Ingested::from_directory(
        configuration.input_directory.as_path(),
        configuration.algorithms.as_slice(),
        configuration.parallel,
    )?;
    if !configuration.quiet {
        for input in ingested.inputs().iter() {
            eprintln!(
                "    {} {} files of {}",
                "Ingested".bright_green().bold(),
                input.trials.len(),
                input.algorithm,
            );
        }
    }

    let validated = ingested.validate()?;
    if !configuration.quiet {
        eprintln!(
            "   {} {} algorithms",
            "Validated".bright_green().bold(),
            validated.inputs().len(),
        );
    }

    let reduced = validated.reduce()?;
    if !configuration.quiet {
        eprintln!(
            "     {} to the minimum time per instance",
            "Reduced".bright_green().bold(),
        );
    }

    let tables =
        reduced.compare_all(configuration.comparisons.as_slice(), configuration.sizes.as_slice())?;
    for table in tables.iter() {
        println!(
            "Comparison between {} and {}.",
            table.reference, table.candidate
        );
        println!(
            "{}",
            mst_benchmark_analyzer::Table::from(table).render(configuration.table_format)
        );
    }

    if let Some(report_path) = configuration.report_path.as_ref() {
        mst_benchmark_analyzer::Output::report(tables.as_slice(), configuration.report_format)?
            .write_to_file(report_path.as_path())?;
        if !configuration.quiet {
            eprintln!(
                "       {} {} report to {report_path:?}",
                "Wrote".bright_green().bold(),
                configuration.report_format,
            );
        }
    }

    if let Some(export_directory) = configuration.export_directory.as_ref() {
        mst_benchmark_analyzer::Output::exports(reduced.datasets(), configuration.export_latex)?
            .write_to_file(export_directory.as_path())?;
        if !configuration.quiet {
            eprintln!(
                "       {} reduced datasets to {export_directory:?}",
                "Wrote".bright_green().bold(),
            );
        }
    }

    if let Some(chart_directory) = configuration.chart_directory.as_ref() {
        for chart_set in configuration.chart_sets.iter() {
            let charts = chart_set.charts(&reduced, configuration.sizes.as_slice())?;
            mst_benchmark_analyzer::Output::charts(charts.as_slice())?
                .write_to_file(chart_directory.join(chart_set.to_string()).as_path())?;
            if !configuration.quiet {
                eprintln!(
                    "       {} {} {chart_set} charts to {chart_directory:?}",
                    "Wrote".bright_green().bold(),
                    charts.len(),
                );
            }
        }
    }

    Ok(())
}
