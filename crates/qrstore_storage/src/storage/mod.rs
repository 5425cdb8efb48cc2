#[cfg(feature = "aws_storage")]
pub mod aws;
pub mod base;
pub mod enums;
pub mod local;
