mod animation;
mod edge;
mod errors;
mod handle;
mod layout;
mod options;
mod state;
mod view;

pub use animation::{ease_in, HandleTween, HandleVisual};
pub use edge::ControlEdge;
pub use errors::PanelError;
pub use options::PanelOptions;
pub use view::ResizablePanel;
