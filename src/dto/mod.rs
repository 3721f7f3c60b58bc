pub mod access_token;
pub mod drive_file_meta;
pub mod token_response;
pub mod uploaded_file_info;
