use crate::parser::ParseError;

#[cfg(any(test, feature = "unit_test"))]
use std::cell::RefCell;
#[cfg(any(test, feature = "unit_test"))]
use std::rc::Rc;

/// Where a [`GeneralParser`](crate::GeneralParser) writes its output.
pub trait UserInterface {
    /// Print a message (ex: the help message).
    fn print(&self, message: String);

    /// Print a parse error.
    fn print_error(&self, error: ParseError);
}

/// Prints messages to stdout and errors to stderr.
pub(crate) struct ConsoleInterface {}

impl Default for ConsoleInterface {
    fn default() -> Self {
        Self {}
    }
}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{error}");
    }
}

/// *Available using 'unit_test' crate feature only.*</br></br>
/// Keeps everything printed in memory.
///
/// Clones share the same memory, so a clone may be handed to the parser while the original is inspected.
#[cfg(any(test, feature = "unit_test"))]
#[derive(Debug, Clone, Default)]
pub struct BufferInterface {
    messages: Rc<RefCell<Vec<String>>>,
    errors: Rc<RefCell<Vec<String>>>,
}

#[cfg(any(test, feature = "unit_test"))]
impl BufferInterface {
    /// The printed messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// The printed errors, in order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

#[cfg(any(test, feature = "unit_test"))]
impl UserInterface for BufferInterface {
    fn print(&self, message: String) {
        self.messages.borrow_mut().push(message);
    }

    fn print_error(&self, error: ParseError) {
        self.errors.borrow_mut().push(error.to_string());
    }
}
