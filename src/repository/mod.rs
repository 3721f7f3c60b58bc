pub mod drive_repository_impl;
