mod http_server;

pub use http_server::*;
