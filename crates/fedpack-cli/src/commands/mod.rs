pub mod build;
pub mod declare;
pub mod finalize;
pub mod init;
pub mod inspect;
pub mod manifest;
pub mod resolve;
