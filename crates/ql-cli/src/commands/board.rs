use colored::Colorize;

use ql_core::GameBoard;

pub fn run(days: u32, day: u32) -> Result<(), String> {
    if days == 0 {
        return Err("mission must run for at least one day".into());
    }

    let board = GameBoard::for_days(days);
    let marker = board.clamp(day);

    println!("  Board for a {days}-day mission, marker at day {marker}:");
    println!();

    for tile in board.tiles() {
        let pointer = if tile.day == marker { "\u{25b6}" } else { " " };
        let line = format!("  {pointer} {:>4}  {}", tile.day, tile.label());
        if tile.day == marker {
            println!("{}", line.bold());
        } else if tile.day < marker {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }

    println!();
    println!("  {} tiles", board.tiles().len());

    Ok(())
}
