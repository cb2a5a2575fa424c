pub mod page;
pub mod registry;
pub mod tab_bar;

pub use page::TabPage;
pub use registry::tab_label_for_key;
pub use tab_bar::TabBar;
