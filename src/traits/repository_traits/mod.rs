pub mod drive_repository;
