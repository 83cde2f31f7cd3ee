pub mod daisy_ui;
pub mod embed_frame;
pub mod footer;
pub mod header;
pub mod ui;

pub use embed_frame::{EmbedFrame, FrameKind};
pub use footer::Footer;
pub use header::Header;
