pub mod load_guard;
pub mod use_bookings;
pub mod use_identity;
pub mod use_notice;
pub mod use_slots;
pub mod use_widget;
