// Command: bind a receiver and an action into an object the invoker can
// trigger without knowing either.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::error::{PatternError, Result};

pub trait Command {
    fn execute(&mut self);
}

/// Receiver.
#[derive(Debug, Default)]
pub struct Light {
    on: bool,
    switches: u32,
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_on(&mut self) {
        self.on = true;
        self.switches += 1;
    }

    pub fn turn_off(&mut self) {
        self.on = false;
        self.switches += 1;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Number of on/off operations performed so far.
    pub fn switches(&self) -> u32 {
        self.switches
    }
}

pub struct TurnOnCommand {
    light: Rc<RefCell<Light>>,
}

impl TurnOnCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for TurnOnCommand {
    fn execute(&mut self) {
        self.light.borrow_mut().turn_on();
    }
}

pub struct TurnOffCommand {
    light: Rc<RefCell<Light>>,
}

impl TurnOffCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for TurnOffCommand {
    fn execute(&mut self) {
        self.light.borrow_mut().turn_off();
    }
}

/// Command backed by a closure that captures its own receiver.
pub struct FnCommand {
    action: Box<dyn FnMut()>,
}

impl FnCommand {
    pub fn new(action: impl FnMut() + 'static) -> Self {
        Self {
            action: Box::new(action),
        }
    }
}

impl Command for FnCommand {
    fn execute(&mut self) {
        (self.action)();
    }
}

/// Invoker. Knows only the `Command` capability, never the receiver.
#[derive(Default)]
pub struct RemoteControl {
    command: Option<Box<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_command(&mut self, command: Box<dyn Command>) {
        self.command = Some(command);
    }

    pub fn press_button(&mut self) -> Result<()> {
        let command = self
            .command
            .as_mut()
            .ok_or(PatternError::not_configured("remote control"))?;
        debug!("executing bound command");
        command.execute();
        Ok(())
    }
}
