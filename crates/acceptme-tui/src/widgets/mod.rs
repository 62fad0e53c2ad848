//! Widget components for the AcceptMe TUI

mod champion_picker;
mod confirm_dialog;
mod footer;
mod header;
pub mod modal_overlay;
mod pick_ban;
mod quick_settings;
mod role_tabs;
mod status_panel;

pub use champion_picker::{picker_title, ChampionPicker};
pub use confirm_dialog::ConfirmDialog;
pub use footer::Footer;
pub use header::{MainHeader, APP_TITLE};
pub use pick_ban::{empty_placeholder, section_subtitle, section_title, PickBanSection};
pub use quick_settings::QuickSettings;
pub use role_tabs::RoleTabs;
pub use status_panel::{
    slider, StatusPanel, CONNECTED_LABEL, DISCONNECTED_LABEL, MATCH_FOUND_BANNER, START_LABEL,
    STOP_LABEL,
};
