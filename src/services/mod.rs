pub mod qr;
pub mod quiz;
