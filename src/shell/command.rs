use crate::models::FeedType;

/// One line typed in the interactive shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Start,
    Stop,
    Toggle,
    Type(FeedType),
    Burp,
    Vomit,
    Save,
    Status,
    History,
    Older,
    Newer,
    Report,
    Clear,
    Help,
    Quit,
    Empty,
    InvalidType(String),
    Unknown(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return ShellCommand::Empty;
        };

        match word.to_lowercase().as_str() {
            "start" => ShellCommand::Start,
            "stop" => ShellCommand::Stop,
            "toggle" | "t" => ShellCommand::Toggle,
            "type" => {
                let arg = parts.next().unwrap_or("");
                match FeedType::ft_from_str(arg) {
                    Some(ft) => ShellCommand::Type(ft),
                    None => ShellCommand::InvalidType(arg.to_string()),
                }
            }
            "breast" => ShellCommand::Type(FeedType::Breast),
            "formula" => ShellCommand::Type(FeedType::Formula),
            "burp" => ShellCommand::Burp,
            "vomit" => ShellCommand::Vomit,
            "save" | "confirm" => ShellCommand::Save,
            "status" | "s" => ShellCommand::Status,
            "history" | "h" => ShellCommand::History,
            "older" | "prev" => ShellCommand::Older,
            "newer" | "next" => ShellCommand::Newer,
            "report" => ShellCommand::Report,
            "clear" => ShellCommand::Clear,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => ShellCommand::Unknown(other.to_string()),
        }
    }
}

pub const HELP: &str = "\
Commands:
  start | stop | toggle      start or stop the feeding timer
  type breast|formula        set the feed type of the stopped session (required)
  burp | vomit               toggle the optional details
  save                       store the stopped session
  status                     show the timer
  history | older | newer    browse the history day by day
  report                     print the feeding report
  clear                      delete the whole history (asks for confirmation)
  help | quit";
