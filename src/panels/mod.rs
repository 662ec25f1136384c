mod central_panel;
mod mood_panel;
mod side_panels;
mod tools_panel;

pub use central_panel::central_panel;
pub use mood_panel::mood_panel;
pub use side_panels::{actions_panel, note_panel};
pub use tools_panel::tools_panel;
