pub mod list_view;
