pub mod background;
pub mod modal;
pub mod navigation;
pub mod particles;
pub mod progress;
