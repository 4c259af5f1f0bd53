pub mod date_utils;
pub mod modal;
pub mod modal_frame;
pub mod modal_stack;
pub mod storage;
