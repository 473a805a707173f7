use crate::{CatalogError, DeviceManager, Selection};
use log::{debug, info};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Введите номер устройства для вывода информации (0 - для выхода): ";
pub const EXIT_MESSAGE: &str = "Выход из программы.";
pub const INVALID_INPUT: &str = "Некорректный ввод.";

/// What a console session ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Exited,
    /// Report printed for this 0-based index.
    Shown(usize),
    /// The typed 1-based position had no device.
    NotFound(i64),
    InvalidInput(String),
}

/// One round of list, prompt, and lookup against a [`DeviceManager`].
pub struct ConsoleSession<'a> {
    manager: &'a DeviceManager,
}

impl<'a> ConsoleSession<'a> {
    pub fn new(manager: &'a DeviceManager) -> Self {
        Self { manager }
    }

    /// Prints the device list and the prompt, reads the first non-blank line
    /// from `input`, and writes the matching response to `output`.
    pub fn run<R, W>(&self, mut input: R, output: &mut W) -> Result<SessionOutcome, CatalogError>
    where
        R: BufRead,
        W: Write,
    {
        self.manager.show_devices(output)?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 || !line.trim().is_empty() {
                break;
            }
        }

        let outcome = self.respond(Selection::parse(&line), output)?;
        output.flush()?;
        Ok(outcome)
    }

    fn respond<W: Write>(
        &self,
        selection: Selection,
        output: &mut W,
    ) -> Result<SessionOutcome, CatalogError> {
        match &selection {
            Selection::Exit => {
                writeln!(output, "{}", EXIT_MESSAGE)?;
                Ok(SessionOutcome::Exited)
            }
            Selection::Position(position) => {
                let index = selection.index().unwrap_or(-1);
                self.manager.show_device_info(index, output)?;
                match usize::try_from(index) {
                    Ok(i) if i < self.manager.len() => {
                        info!("showed device #{}", position);
                        Ok(SessionOutcome::Shown(i))
                    }
                    _ => Ok(SessionOutcome::NotFound(*position)),
                }
            }
            Selection::Invalid(text) => {
                debug!("rejected menu input {:?}", text);
                writeln!(output, "{}", INVALID_INPUT)?;
                Ok(SessionOutcome::InvalidInput(text.clone()))
            }
        }
    }
}
