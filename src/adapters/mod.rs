// Adapters layer: concrete implementations for external systems (http, output).

pub mod http;
pub mod output;
