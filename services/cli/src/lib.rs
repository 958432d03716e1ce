mod cli;
mod commands;
mod demo;
mod infra;
mod render;

use footprint::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
