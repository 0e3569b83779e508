pub mod result_list;
pub mod rows;
pub mod search_input;
pub mod theme;
