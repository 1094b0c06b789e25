mod models;
mod run;
mod state;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let mut tracker = state::Tracker::new();
    run::as_tui(&mut tracker)
}
