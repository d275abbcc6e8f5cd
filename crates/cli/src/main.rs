//! Cutlist command-line interface.

mod logging;
mod report;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use cutlist::bom::BomParser;
use cutlist::budget::{BudgetConfig, BudgetEngine, RateConfig};
use cutlist::nesting::ShelfNester;
use cutlist::{NestingConfig, Part, SheetSpec};
use report::LayoutReport;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cutlist")]
#[command(about = "Nest furniture panels onto stock sheets and price the job")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the parts found in a BOM file
    Extract {
        /// BOM text file with `qty x width x height` lines
        bom: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Nest the parts of a BOM file onto stock sheets
    Pack {
        /// BOM text file with `qty x width x height` lines
        bom: PathBuf,

        #[command(flatten)]
        sheet: SheetArgs,

        /// Pack wood-grain and white parts onto separate stock
        #[arg(long)]
        by_material: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Nest a BOM file and price the resulting layout
    Budget {
        /// BOM text file with `qty x width x height` lines
        bom: PathBuf,

        /// JSON file with price_per_sheet, markup_multiplier, labor_per_square_meter
        #[arg(short, long)]
        rates: PathBuf,

        #[command(flatten)]
        sheet: SheetArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Price a job from its part area alone
    Quote {
        /// Total part area in m2
        #[arg(short, long)]
        area: f64,

        /// JSON file with price_per_sheet, markup_multiplier, labor_per_square_meter
        #[arg(short, long)]
        rates: PathBuf,

        /// Usable part area per stock sheet in m2 (defaults to the sheet size)
        #[arg(long)]
        sheet_area: Option<f64>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct SheetArgs {
    /// Stock sheet width in mm
    #[arg(long, default_value_t = SheetSpec::STANDARD.width)]
    sheet_width: u32,

    /// Stock sheet height in mm
    #[arg(long, default_value_t = SheetSpec::STANDARD.height)]
    sheet_height: u32,

    /// Saw blade kerf in mm
    #[arg(short, long, default_value_t = NestingConfig::default().kerf)]
    kerf: u32,

    /// Edge trim in mm
    #[arg(short, long, default_value_t = NestingConfig::default().trim)]
    trim: u32,
}

impl From<&SheetArgs> for NestingConfig {
    fn from(args: &SheetArgs) -> Self {
        NestingConfig::new()
            .with_sheet(args.sheet_width, args.sheet_height)
            .with_kerf(args.kerf)
            .with_trim(args.trim)
    }
}

fn read_parts(path: &Path) -> anyhow::Result<Vec<Part>> {
    let parts = BomParser::new()
        .parse_file(path)
        .with_context(|| format!("failed to read BOM {}", path.display()))?;
    if parts.is_empty() {
        log::warn!("no `qty x width x height` lines found in {}", path.display());
    }
    Ok(parts)
}

fn read_rates(path: &Path) -> anyhow::Result<RateConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rates {}", path.display()))?;
    let rates: RateConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse rates {}", path.display()))?;
    rates
        .validate()
        .with_context(|| format!("invalid rates in {}", path.display()))?;
    Ok(rates)
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { bom, json } => {
            let parts = read_parts(&bom)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&parts)?);
            } else {
                report::print_parts(&parts);
            }
        }

        Commands::Pack {
            bom,
            sheet,
            by_material,
            json,
        } => {
            let parts = read_parts(&bom)?;
            let config = NestingConfig::from(&sheet);
            let nester = ShelfNester::new(config.clone());

            if by_material {
                let layouts = nester.pack_by_material(&parts)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&layouts)?);
                } else {
                    report::print_material_layouts(&config, &layouts);
                }
            } else {
                let sheets = nester.pack(&parts)?;
                if json {
                    let doc = LayoutReport::new(&config, &sheets);
                    println!("{}", serde_json::to_string_pretty(&doc)?);
                } else {
                    report::print_layout(&config, &sheets);
                }
            }
        }

        Commands::Budget {
            bom,
            rates,
            sheet,
            json,
        } => {
            let parts = read_parts(&bom)?;
            let rates = read_rates(&rates)?;
            let config = NestingConfig::from(&sheet);

            let sheets = ShelfNester::new(config.clone()).pack(&parts)?;
            let engine = BudgetEngine::new(BudgetConfig::new().with_sheet(&config.sheet));
            let budget = engine
                .calculate_for_layout(&sheets, &rates)
                .context("cannot price an empty layout")?;

            if json {
                let doc = LayoutReport::new(&config, &sheets).with_budget(&budget);
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                report::print_layout(&config, &sheets);
                println!();
                report::print_budget(&budget);
            }
        }

        Commands::Quote {
            area,
            rates,
            sheet_area,
            json,
        } => {
            let rates = read_rates(&rates)?;
            let mut config = BudgetConfig::new();
            if let Some(sheet_area) = sheet_area {
                config = config.with_effective_sheet_area(sheet_area);
            }

            let budget = BudgetEngine::new(config).calculate(area, &rates)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&budget)?);
            } else {
                report::print_budget(&budget);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sheet_args_defaults() {
        let cli = Cli::try_parse_from(["cutlist", "pack", "bom.txt"]).unwrap();
        match cli.command {
            Commands::Pack { sheet, .. } => {
                assert_eq!(NestingConfig::from(&sheet), NestingConfig::default());
            }
            _ => panic!("expected pack"),
        }
    }

    #[test]
    fn test_sheet_args_override() {
        let cli = Cli::try_parse_from([
            "cutlist",
            "budget",
            "bom.txt",
            "--rates",
            "rates.json",
            "--sheet-width",
            "2730",
            "--sheet-height",
            "1830",
            "--kerf",
            "4",
        ])
        .unwrap();
        match cli.command {
            Commands::Budget { sheet, .. } => {
                let config = NestingConfig::from(&sheet);
                assert_eq!(config.sheet, SheetSpec::new(2730, 1830));
                assert_eq!(config.kerf, 4);
                assert_eq!(config.trim, 10);
            }
            _ => panic!("expected budget"),
        }
    }
}
