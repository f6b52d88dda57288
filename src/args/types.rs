use clap::Parser;

use crate::controller::store::DEFAULT_STORAGE_KEY;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Sqlite file backing the blob store. `:memory:` keeps everything in memory.
    #[arg(
        short = 'n',
        long,
        value_name = "DATABASE_NAME",
        default_value = "golf-medal.db",
        value_parser = crate::args::validation::check_db_name
    )]
    pub db_name: String,
    /// Key the scorecard blob is stored under.
    #[arg(short = 'k', long, value_name = "STORAGE_KEY", default_value = DEFAULT_STORAGE_KEY)]
    pub storage_key: String,
    #[arg(short = 'b', long, value_name = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "5201")]
    pub port: u16,
    /// Directory served under /static.
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub db_name: String,
    pub storage_key: String,
    pub bind: String,
    pub port: u16,
    pub static_dir: String,
}
