pub mod console;
pub mod traits;

pub use console::{ConsoleNotifier, ConsoleRenderer, ConsoleSurface};
pub use traits::{Notifier, Panel, Renderer, Surface};
