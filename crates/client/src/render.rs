//! Plain-text rendering of the committed board.

use std::fmt::Write;

use skirmish_core::{Faction, Game, Layer};

/// One line per row, `y = 0` first, one glyph per cell.
///
/// Missing cells (a short slice) render as empty.
pub fn render_layer(width: u32, height: u32, cells: &[Faction]) -> String {
    let (width, height) = (width as usize, height as usize);
    let mut out = String::with_capacity((width + 1) * height);

    for y in 0..height {
        for x in 0..width {
            let cell = cells.get(y * width + x).copied().unwrap_or_default();
            out.push(cell.glyph());
        }
        out.push('\n');
    }
    out
}

/// Header, committed layer and a legend of the players still in play.
pub fn render_game(game: &Game) -> String {
    let board = game.board();
    let mut out = format!(
        "turn {}/{} [{}]\n",
        game.current_turn(),
        game.turn_limit(),
        game.status()
    );
    out.push_str(&render_layer(
        board.width(),
        board.height(),
        board.layer(Layer::Current),
    ));

    for player in game.players().iter().filter(|player| player.is_active()) {
        // Writing to a String cannot fail.
        let _ = match player.position {
            Some(position) => writeln!(out, "{} {} {}", player.pseudo, player.glyph(), position),
            None => writeln!(out, "{} {} unplaced", player.pseudo, player.glyph()),
        };
    }
    out
}
