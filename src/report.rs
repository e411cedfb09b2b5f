use colored::*;

use crate::footprint::EmissionResult;
use crate::utils::percent;

pub fn print_total(result: &EmissionResult) {
    println!(
        "Total carbon emissions: {} per day.",
        format!("{:.2} kg CO2", result.grand_total).bold()
    );
}

pub fn print_no_results() {
    println!("No results to display.");
}

/// Terminal rendition of the chart: one proportional bar per category.
pub fn print_breakdown(result: &EmissionResult) {
    println!();
    println!("{}", "Your Daily Carbon Footprint".bold());

    for (label, value) in result.categories() {
        let share = percent(value, result.grand_total);
        // Full width is 50 characters.
        let bar = "█".repeat((share / 2.0).round() as usize);
        let bar = match label {
            "Travel" => bar.red(),
            "Energy" => bar.yellow(),
            _ => bar.green(),
        };
        println!(
            "{} {:>9} {:>6} {}",
            format!("{:<7}", label).bright_white(),
            format!("{:.2} kg", value),
            format!("{:.1}%", share),
            bar
        );
    }
}
