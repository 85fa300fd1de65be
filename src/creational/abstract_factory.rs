// Abstract Factory: one factory per platform, each producing a matching
// family of widgets.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Mac,
}

impl Platform {
    /// Factory for this platform's widget family.
    pub fn factory(self) -> Box<dyn GuiFactory> {
        match self {
            Platform::Windows => Box::new(WindowsFactory),
            Platform::Mac => Box::new(MacFactory),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "Windows"),
            Platform::Mac => write!(f, "Mac"),
        }
    }
}

pub trait Button {
    fn platform(&self) -> Platform;

    fn render(&self) -> String {
        format!("Rendering a {} button", self.platform())
    }
}

pub trait Checkbox {
    fn platform(&self) -> Platform;

    fn render(&self) -> String {
        format!("Rendering a {} checkbox", self.platform())
    }
}

/// Every product returned by one factory belongs to the same [`Platform`].
pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

// ============================================================================
// Windows family
// ============================================================================

pub struct WindowsButton;
impl Button for WindowsButton {
    fn platform(&self) -> Platform {
        Platform::Windows
    }
}

pub struct WindowsCheckbox;
impl Checkbox for WindowsCheckbox {
    fn platform(&self) -> Platform {
        Platform::Windows
    }
}

pub struct WindowsFactory;
impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

// ============================================================================
// Mac family
// ============================================================================

pub struct MacButton;
impl Button for MacButton {
    fn platform(&self) -> Platform {
        Platform::Mac
    }
}

pub struct MacCheckbox;
impl Checkbox for MacCheckbox {
    fn platform(&self) -> Platform {
        Platform::Mac
    }
}

pub struct MacFactory;
impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

// ============================================================================
// Client
// ============================================================================

/// Client that builds its whole UI from a single factory.
pub struct Application {
    button: Box<dyn Button>,
    checkbox: Box<dyn Checkbox>,
}

impl Application {
    pub fn new(factory: &dyn GuiFactory) -> Self {
        Self {
            button: factory.create_button(),
            checkbox: factory.create_checkbox(),
        }
    }

    pub fn render(&self) -> Vec<String> {
        vec![self.button.render(), self.checkbox.render()]
    }

    pub fn platform(&self) -> Platform {
        self.button.platform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families_are_consistent() {
        for platform in [Platform::Windows, Platform::Mac] {
            let factory = platform.factory();
            assert_eq!(factory.create_button().platform(), platform);
            assert_eq!(factory.create_checkbox().platform(), platform);
        }
    }

    #[test]
    fn test_windows_application() {
        let app = Application::new(&WindowsFactory);
        assert_eq!(
            app.render(),
            vec!["Rendering a Windows button", "Rendering a Windows checkbox"]
        );
        assert_eq!(app.platform(), Platform::Windows);
    }

    #[test]
    fn test_mac_application() {
        let app = Application::new(&*Platform::Mac.factory());
        assert_eq!(
            app.render(),
            vec!["Rendering a Mac button", "Rendering a Mac checkbox"]
        );
    }
}
