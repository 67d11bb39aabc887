mod config;
mod error;
mod graph;
mod gui;
mod layout;
mod pairs;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::{CONFIG_FILE, VisualizerConfig};
use error::VisualizerResult;
use graph::SourceGraph;
use gui::edge_table::EdgeRow;
use gui::figure::Figure;
use layout::LayoutKind;
use pairs::{ExclusionFilter, PairTable};

/// Visualize knowledge source network from pairs.txt
#[derive(Debug, Parser)]
#[command(name = "pairs-visualizer")]
struct Cli {
    /// Graph layout to use
    #[arg(long, value_enum, default_value_t = LayoutKind::Circular)]
    layout: LayoutKind,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> VisualizerResult<()> {
    let config = VisualizerConfig::load_or_default(Path::new(CONFIG_FILE))?;
    let filter = ExclusionFilter::new(&config.exclusions);
    tracing::debug!(exclusions = ?filter.tokens().collect::<Vec<_>>(), "exclusion filter");

    let table = PairTable::from_path(&config.input, &filter)?;
    if table.is_empty() {
        tracing::warn!(input = %config.input.display(), "no edges survived filtering");
    }

    let union = SourceGraph::union(&table);
    let layout = cli.layout.compute(&union, config.spring_seed);
    tracing::info!(
        input = %config.input.display(),
        layout = %cli.layout,
        nodes = layout.len(),
        edges = union.edge_count(),
        "computed layout"
    );
    tracing::debug!(
        positions = %serde_json::to_string(&layout).unwrap_or_default(),
        "layout positions"
    );

    let figure = Figure::build(&table, &layout);
    gui::app::run(figure, EdgeRow::from_table(&table), cli.layout, config.style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn layout_defaults_to_circular() {
        let cli = Cli::try_parse_from(["pairs-visualizer"]).unwrap();
        assert_eq!(cli.layout, LayoutKind::Circular);
    }

    #[test]
    fn accepts_every_layout_name() {
        for name in ["spring", "kamada_kawai", "circular", "shell", "spectral"] {
            let cli = Cli::try_parse_from(["pairs-visualizer", "--layout", name]).unwrap();
            assert_eq!(cli.layout.as_str(), name);
        }
    }

    #[test]
    fn rejects_unknown_layouts_and_flags() {
        assert!(Cli::try_parse_from(["pairs-visualizer", "--layout", "random"]).is_err());
        assert!(Cli::try_parse_from(["pairs-visualizer", "--input", "x.txt"]).is_err());
    }

    #[test]
    fn layout_is_the_only_flag() {
        for flag in ["--version", "-V"] {
            let err = Cli::try_parse_from(["pairs-visualizer", flag]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument, "{flag}");
        }
        let command = Cli::command();
        let flags: Vec<_> = command
            .get_arguments()
            .filter_map(|arg| arg.get_long())
            .filter(|long| *long != "help")
            .collect();
        assert_eq!(flags, vec!["layout"]);
    }
}
