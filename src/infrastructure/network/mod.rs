pub mod client;
pub mod http;

// Re-export for convenience
pub use client::PanLexClient;
