pub mod client;

pub use client::LostArkClient;
