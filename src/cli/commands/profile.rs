use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Durability;
use crate::errors::{AppError, AppResult};
use crate::models::UserProfile;
use crate::storage::PROFILE_KEY;
use crate::ui::messages::{info, success};
use crate::utils::colors::colorize_optional;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile {
        mother,
        child,
        age,
        print,
    } = cmd
    {
        let mut repo = super::open_repository(cfg)?;
        let mut profile = repo.profile().unwrap_or_default();

        let updating = mother.is_some() || child.is_some() || age.is_some();
        if updating {
            profile.merge(mother.clone(), child.clone(), age.clone());
            if let Durability::Unsaved(reason) = repo.save_profile(&profile) {
                return Err(AppError::StorageWrite {
                    key: PROFILE_KEY.to_string(),
                    reason,
                });
            }
            repo.record("profile", "", "Profile updated");
            success("Profile saved.");
        }

        if *print || !updating {
            print_profile(&profile);
        }
    }
    Ok(())
}

fn print_profile(p: &UserProfile) {
    if p.is_empty() {
        info("No profile stored. Use --mother, --child and --age to set one.");
        return;
    }
    println!("👩 Mother    : {}", colorize_optional(p.mother().unwrap_or("--")));
    println!("👶 Child     : {}", colorize_optional(p.child().unwrap_or("--")));
    println!("🎂 Child age : {}", colorize_optional(p.age().unwrap_or("--")));
}
