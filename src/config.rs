use clap::Parser;

/// A minimal HTTP/1.1 static file server.
#[derive(Parser, Debug, Clone)]
pub struct Config {
    /// Directory files are served from, relative to the working directory.
    pub base_dir: String,

    /// Port the server listens on.
    #[arg(default_value_t = 8080)]
    pub port: u16,
}
