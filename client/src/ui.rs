use tictactoe_common::games::tictactoe::{
    Cells, GameOutcome, InvalidMove, PlayerMarks, TurnReport, TurnStatus, WinningLine, BOARD_SIZE,
};

pub fn status_message(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::InProgress => "In Game",
        GameOutcome::HumanWin => "You Win!!",
        GameOutcome::ComputerWin => "You Lose!",
        GameOutcome::Tie => "Game Tied!",
    }
}

pub fn render_board(cells: &Cells) -> String {
    let mut out = String::from("    0   1   2\n");
    for (row, marks) in cells.iter().enumerate() {
        let line: Vec<String> = marks.iter().map(|m| format!(" {} ", m.symbol())).collect();
        out.push_str(&format!("{}  {}\n", row, line.join("|")));
        if row + 1 < BOARD_SIZE {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}

pub fn render_status(outcome: GameOutcome) -> String {
    format!("Game Status: {}", status_message(outcome))
}

pub fn render_marks(marks: PlayerMarks) -> String {
    format!(
        "You play '{}', the computer plays '{}'.",
        marks.human.symbol(),
        marks.computer.symbol()
    )
}

pub fn render_ignored(reason: InvalidMove) -> String {
    format!("Move ignored: {}", reason)
}

pub fn render_winning_line(line: &WinningLine) -> String {
    let cells: Vec<String> = line.cells.iter().map(|pos| pos.to_string()).collect();
    format!("Winning line: {}", cells.join(" "))
}

/// Full text shown after a human move. Ignored moves only print the reason.
pub fn render_turn(report: &TurnReport) -> String {
    match report.status {
        TurnStatus::Ignored(reason) => render_ignored(reason),
        TurnStatus::Applied => {
            let mut out = String::new();
            if let Some(pos) = report.computer_move {
                out.push_str(&format!("Computer played {}\n", pos));
            }
            out.push_str(&render_board(&report.cells));
            out.push_str(&render_status(report.outcome));
            out
        }
    }
}
