use anyhow::Result;
use casems_application::{AppContext, DistributionEntry};
use colored::Colorize;

use crate::output::print_case_row;

pub async fn run(ctx: &AppContext, json: bool) -> Result<()> {
    let stats = ctx.entities.dashboard_stats().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Dashboard".bold());
    println!("  Total cases:      {}", stats.total_cases);
    println!("  Categories:       {}", stats.total_categories);
    println!("  Active cases:     {}", stats.active_cases);
    println!("  Open cases:       {}", stats.open_cases);
    println!("  Closed cases:     {}", stats.closed_cases);

    println!();
    println!("{}", "Recent cases".bold());
    for case in &stats.recent {
        print_case_row(case);
    }

    println!();
    println!("{}", "By category".bold());
    print_distribution(&stats.category_distribution);

    println!();
    println!("{}", "By status".bold());
    print_distribution(&stats.status_distribution);
    Ok(())
}

fn print_distribution(entries: &[DistributionEntry]) {
    for entry in entries {
        let bar = "#".repeat((entry.percentage / 5.0).round() as usize);
        println!(
            "  {:<20} {:>3} {:>6.1}% {}",
            entry.label,
            entry.count,
            entry.percentage,
            bar.green()
        );
    }
}
