use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::build_report;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { file, force } = cmd {
        let mut repo = super::open_repository(cfg)?;
        let profile = repo.profile();
        let report = build_report(repo.sessions(), profile.as_ref());

        match file {
            Some(f) => {
                let path = ExportLogic::write_report(&report, f, *force)?;
                repo.record("report", &path.to_string_lossy(), "Report written");
            }
            None => println!("{}", report),
        }
    }
    Ok(())
}
