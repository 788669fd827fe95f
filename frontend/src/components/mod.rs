pub mod bookings_list;
pub mod court_selector;
pub mod date_picker;
pub mod header;
pub mod notice_banner;
pub mod slot_grid;
pub mod tab_bar;
