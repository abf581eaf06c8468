use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        view,
        range,
        force,
    } = cmd
    {
        ExportLogic::export(cfg, *format, file, *view, range.as_deref(), *force)?;
    }
    Ok(())
}
