use comfy_table::{ContentArrangement, Table};

use ql_mechanics::RollMode;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Mode", "Faces", "Range", "Odds"]);

    for mode in [RollMode::Success, RollMode::Failure] {
        let faces = mode.faces();
        let faces_str = faces.map(|f| f.to_string()).join(" ");
        table.add_row(vec![
            mode.to_string(),
            faces_str,
            mode.display_range().to_string(),
            odds_line(&faces),
        ]);
    }

    println!("{table}");
    println!();
    println!("  One uniform pick over six faces; a face listed twice is twice as likely.");

    Ok(())
}

/// Format the odds of each distinct face, e.g. "P(3)=1/6  P(4)=2/6".
fn odds_line(faces: &[u32; 6]) -> String {
    let mut parts = Vec::new();
    let mut seen = Vec::new();
    for &face in faces {
        if seen.contains(&face) {
            continue;
        }
        seen.push(face);
        let weight = faces.iter().filter(|&&f| f == face).count();
        parts.push(format!("P({face})={weight}/6"));
    }
    parts.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odds_line_counts_duplicates() {
        assert_eq!(
            odds_line(&[3, 4, 4, 5, 5, 6]),
            "P(3)=1/6  P(4)=2/6  P(5)=2/6  P(6)=1/6"
        );
        assert_eq!(odds_line(&[1, 1, 1, 2, 2, 2]), "P(1)=3/6  P(2)=3/6");
    }
}
