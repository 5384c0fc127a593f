pub mod footer;
pub mod pane_list;

pub use footer::Footer;
pub use pane_list::PaneList;
