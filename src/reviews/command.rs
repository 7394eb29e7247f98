pub mod add_review_cmd;
pub mod get_review_form_cmd;
