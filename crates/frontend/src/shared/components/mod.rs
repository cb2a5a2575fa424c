pub mod confirm_dialog;
pub mod pagination_controls;
pub mod record_form;
pub mod record_list;
pub mod table_checkbox;
