use crm_app::app::{run, AppConfig};

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let config = match AppConfig::from_env() {
        Ok(config) => config.with_args(std::env::args().skip(1)),
        Err(err) => {
            eprintln!("Invalid configuration: {err:#}");
            std::process::exit(2);
        }
    };
    if let Err(err) = run(config) {
        eprintln!("Failed to build digest: {err:#}");
        std::process::exit(1);
    }
}
