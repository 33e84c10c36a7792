use std::io::stdout;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use ratatui::DefaultTerminal;

pub fn init() -> Result<DefaultTerminal> {
    let terminal = ratatui::try_init().wrap_err("failed to initialise terminal")?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));

    execute!(stdout(), Clear(ClearType::All), Hide).wrap_err("failed to prepare screen")?;
    Ok(terminal)
}

pub fn restore() -> Result<()> {
    ratatui::try_restore().wrap_err("failed to restore terminal")?;
    execute!(stdout(), Show, Clear(ClearType::All), MoveTo(0, 0))
        .wrap_err("failed to reset cursor")?;
    Ok(())
}
