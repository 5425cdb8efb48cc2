pub mod color;
pub mod json;
pub mod key;
pub mod qr;
