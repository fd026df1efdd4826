pub mod connection;
pub mod ice;
