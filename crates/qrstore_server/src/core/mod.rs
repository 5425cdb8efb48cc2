pub mod error;
pub mod health;
pub mod qr;
pub mod router;
pub mod setup;
pub mod state;
