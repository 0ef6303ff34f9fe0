pub mod create_tag_request;
pub mod tag;
pub mod tag_draft;
pub mod tag_name;
