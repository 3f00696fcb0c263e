use clap::Parser;
use pepscan::codon::{codon_usage, codon_usage_report, write_codon_table};
use pepscan::error::PeptideError;
use pepscan::plot::{BarChart, FilePlotter, ImageFormat, NoopPlotter, Plotter};
use pepscan::properties::{amino_acid_count, hydropathy_scores, instability_index};

#[derive(Parser)]
#[command(
    name = "pepscan",
    about = "Peptide Analysis Tool: character-code statistics and codon usage for a peptide sequence",
    long_about = "Analyzes a single peptide sequence. Prints the residue count, an instability index \
                  (the mean character code, to two decimals) and a codon usage report built from \
                  consecutive three-residue chunks. Per-residue hydropathy scores and codon usage \
                  frequencies are rendered as bar charts.",
    version,
    after_help = "Example usage:\n    \
                  pepscan MKVLAA\n    \
                  pepscan MKVLAAGLLA --plot-dir plots --format svg\n    \
                  pepscan MKVLAAGLLA --no-plot --codon-table results/codons.csv",
    color = clap::ColorChoice::Always
)]
#[derive(Debug)]
struct Args {
    /// Input peptide sequence
    /// Any characters are accepted; the sequence must not be empty
    #[arg(value_name = "SEQUENCE")]
    sequence: String,

    /// Directory the hydropathy and codon usage charts are written to
    #[arg(long, default_value = ".")]
    plot_dir: String,

    /// Image format of the rendered charts
    #[arg(long, value_enum, default_value_t = ImageFormat::Png)]
    format: ImageFormat,

    /// Skip rendering the charts
    #[arg(long)]
    no_plot: bool,

    /// Also write the codon usage table to this file (.csv or .parquet)
    #[arg(long, value_name = "FILE")]
    codon_table: Option<String>,
}

fn analyze(args: &Args, plotter: &mut dyn Plotter) -> Result<(), PeptideError> {
    let sequence = args.sequence.as_str();

    // everything is computed up front so a bad sequence fails before any output
    let residues = amino_acid_count(sequence);
    let hydropathy = hydropathy_scores(sequence);
    let instability = instability_index(sequence)?;
    let codons = codon_usage(sequence);
    let report = codon_usage_report(&codons);

    println!("Amino Acid Count: {}", residues);
    plotter.plot("hydropathy", &BarChart::hydropathy(sequence, &hydropathy))?;
    println!("Instability Index: {:.2}", instability);
    println!();
    print!("{}", report);
    plotter.plot("codon_usage", &BarChart::codon_usage(&codons))?;

    if let Some(path) = &args.codon_table {
        write_codon_table(&codons, path)?;
        eprintln!("Wrote {}", path);
    }

    Ok(())
}

fn main() -> Result<(), PeptideError> {
    let args = Args::parse();

    let mut plotter: Box<dyn Plotter> = if args.no_plot {
        Box::new(NoopPlotter)
    } else {
        Box::new(FilePlotter::new(args.plot_dir.clone(), args.format))
    };

    analyze(&args, plotter.as_mut())
}
