use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut repo = super::open_repository(cfg)?;
        let count = repo.len();
        if let Some(path) = ExportLogic::export_sessions(repo.sessions(), format, file, *force)? {
            repo.record(
                "export",
                &path.to_string_lossy(),
                &format!("Exported {} session(s) as {}", count, format.as_str()),
            );
        }
    }
    Ok(())
}
