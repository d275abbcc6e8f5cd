//! Plain-text and JSON reports.

use cutlist::budget::BudgetResult;
use cutlist::core::{LayoutSummary, MaterialLayout};
use cutlist::{NestingConfig, Part, Sheet};
use serde::Serialize;

/// JSON document written by `pack --json` and `budget --json`.
#[derive(Debug, Serialize)]
pub struct LayoutReport<'a> {
    pub config: &'a NestingConfig,
    pub summary: LayoutSummary,
    pub sheets: &'a [Sheet],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<&'a BudgetResult>,
}

impl<'a> LayoutReport<'a> {
    pub fn new(config: &'a NestingConfig, sheets: &'a [Sheet]) -> Self {
        Self {
            config,
            summary: LayoutSummary::from_sheets(sheets, &config.sheet),
            sheets,
            budget: None,
        }
    }

    pub fn with_budget(mut self, budget: &'a BudgetResult) -> Self {
        self.budget = Some(budget);
        self
    }
}

pub fn print_parts(parts: &[Part]) {
    println!("{:<6} {:<24} {:>5} {:>7} {:>7}  material", "id", "name", "qty", "width", "height");
    println!("{:-<64}", "");
    for part in parts {
        println!(
            "{:<6} {:<24} {:>5} {:>7} {:>7}  {}",
            part.id(),
            part.name(),
            part.quantity(),
            part.width(),
            part.height(),
            part.material()
        );
    }
    println!("\n{} part(s), {:.3} m2", parts.len(), cutlist::core::total_area_m2(parts));
}

pub fn print_layout(config: &NestingConfig, sheets: &[Sheet]) {
    for sheet in sheets {
        let stats = sheet.placement_stats();
        println!(
            "Sheet {} ({}x{} mm): {} piece(s), {} rotated, {}% used",
            sheet.id(),
            config.sheet.width,
            config.sheet.height,
            stats.count,
            stats.rotated_count,
            sheet.efficiency(&config.sheet)
        );
        for item in sheet.items() {
            println!(
                "  {:<10} {:<24} {:>5}x{:<5} at ({:>4}, {:>4}){}",
                item.id,
                item.name,
                item.width,
                item.height,
                item.x,
                item.y,
                if item.rotated { "  rotated" } else { "" }
            );
        }
    }

    let summary = LayoutSummary::from_sheets(sheets, &config.sheet);
    println!(
        "\n{} sheet(s), {} piece(s), {:.3} m2 used of {:.3} m2 ({}%), waste {:.3} m2",
        summary.sheets_used,
        summary.pieces_placed,
        summary.used_area_m2,
        summary.stock_area_m2,
        summary.efficiency_percent,
        summary.waste_area_m2
    );
}

pub fn print_material_layouts(config: &NestingConfig, layouts: &[MaterialLayout]) {
    for layout in layouts {
        println!("== {} board ==", layout.material);
        print_layout(config, &layout.sheets);
        println!();
    }
}

pub fn print_budget(budget: &BudgetResult) {
    println!("Budget for {:.3} m2 on {} sheet(s)", budget.total_area_m2, budget.sheets_used);
    println!("{:-<40}", "");
    for line in &budget.materials {
        println!("  {:<20} {:>14.2}", line.name, line.cost);
    }
    println!("  {:<20} {:>14.2}", "Materials", budget.material_total());
    println!("  {:<20} {:>14.2}", "Labor", budget.labor);
    println!("{:-<40}", "");
    println!("  {:<20} {:>14.2}", "Total cost", budget.total);
    println!("  {:<20} {:>14.2}", "Final price", budget.final_price);
    println!("  {:<20} {:>13.1}%", "Margin", budget.margin);
}
