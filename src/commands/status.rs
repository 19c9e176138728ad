//! Status Command
//!
//! Prints a summary of both embedded datasets without rendering anything.

use crate::models::Table;
use crate::services::{load_activity, load_market};

pub fn run() {
    println!("📊 Embedded Dataset Status\n");

    match show_status() {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn show_status() -> crate::error::Result<()> {
    let market = load_market()?;
    let activity = load_activity()?;

    show_table("Market (Binance snapshot)", &market);
    println!("\n═══════════════════════════════════════════════════════════\n");
    show_table("Activity (GitHub snapshot)", &activity);

    println!("\n💡 Tip: run 'altviz render' to generate the chart sequence");
    Ok(())
}

fn show_table(label: &str, table: &Table) {
    println!("🔹 {}", label);
    println!("   Rows:    {}", table.n_rows());
    println!("   Columns:");
    for name in table.column_names() {
        let kind = if table.column(name).map(|c| c.is_numeric()).unwrap_or(false) {
            "numeric"
        } else {
            "text"
        };
        println!("     {:<14} {}", name, kind);
    }
}
