pub mod data_board;
pub mod record_form;
