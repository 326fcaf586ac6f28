//! Runs the Next Bite screen in the terminal.
//!
//! Usage: `cargo run -- [minutes]`
//!
//! Keys: space starts and pauses, `↑`/`↓` adjust the duration, `v` cycles
//! the volume, `t` swaps the palette, `r` resets, `q` quits.

use bubbletea_rs::{Cmd, Model, Msg, Program};
use nextbite_widgets::app::{self, App};
use nextbite_widgets::timer;

/// Wraps the stock screen so the duration can come from the command line.
struct Demo {
    screen: App,
}

impl Model for Demo {
    fn init() -> (Self, Option<Cmd>) {
        let minutes = std::env::args()
            .nth(1)
            .and_then(|arg| arg.parse().ok())
            .unwrap_or(timer::DEFAULT_MINUTES);

        (
            Demo {
                screen: app::new(minutes),
            },
            None,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.screen.update(msg)
    }

    fn view(&self) -> String {
        self.screen.view()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<Demo>::builder().build()?;
    program.run().await?;
    Ok(())
}
