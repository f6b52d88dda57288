use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the arguments are inconsistent
    pub fn validate(&self) -> Result<(), String> {
        validation::check_storage_key(&self.storage_key)
    }
}

/// Parses and validates the command line, exiting with a message on bad input.
#[must_use]
pub fn args_checks() -> CleanArgs {
    let args = Args::parse();
    if let Err(e) = args.validate() {
        eprintln!("Error: {e}");
        std::process::exit(2);
    }
    CleanArgs::new(args)
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            db_name: args.db_name,
            storage_key: args.storage_key.trim().to_string(),
            bind: args.bind,
            port: args.port,
            static_dir: args.static_dir,
        }
    }
}
