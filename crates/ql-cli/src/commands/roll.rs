use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use ql_mechanics::RollMode;

pub fn run(mode_str: &str, count: u32, seed: Option<u64>) -> Result<(), String> {
    let mode = RollMode::parse(mode_str)
        .ok_or_else(|| format!("unknown mode '{mode_str}', use: success, failure"))?;
    if count == 0 {
        return Err("count must be at least 1".into());
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    if count == 1 {
        let value = mode.roll(&mut rng);
        println!(
            "  {} roll ({}): {}",
            mode,
            mode.display_range(),
            value.to_string().bold()
        );
        return Ok(());
    }

    let mut counts = [0u32; 7];
    for _ in 0..count {
        counts[mode.roll(&mut rng) as usize] += 1;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Value", "Count", "Share"]);

    for (value, &n) in counts.iter().enumerate() {
        if n == 0 {
            continue;
        }
        let share = f64::from(n) / f64::from(count) * 100.0;
        table.add_row(vec![value.to_string(), n.to_string(), format!("{share:.1}%")]);
    }

    println!("{table}");
    println!();
    println!("  {count} {mode} rolls (seed {seed})");

    Ok(())
}
