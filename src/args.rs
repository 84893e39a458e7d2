use clap::Parser;

pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Host address the web server binds to
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub bind_host: String,

    /// Port the web server binds to
    #[arg(short = 'p', long, value_name = "PORT", default_value_t = 8081)]
    pub bind_port: u16,
}
