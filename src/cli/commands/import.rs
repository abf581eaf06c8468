use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde_str;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        ImportLogic::import(cfg, &expand_tilde_str(file))?;
    }
    Ok(())
}
