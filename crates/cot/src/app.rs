use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("cot")
        .about("Open files in the text editor from the command line")
        .long_about("Opens files (or text piped on stdin) in the editor, optionally jumping to a line and column and waiting until the window is closed. With no arguments the editor is just launched.")
        .disable_version_flag(true)
        .arg(
            Arg::new("files")
                .help("Files to open")
                .num_args(0..)
                .value_parser(value_parser!(PathBuf))
                .index(1)
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("wait")
                .short('w')
                .long("wait")
                .help("Wait for the opened window to be closed (one file, piped text or --new only)")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("background")
                .short('g')
                .long("background")
                .help("Do not bring the editor to the foreground")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("new")
                .short('n')
                .long("new")
                .help("Create a new blank document, or create the given file if it does not exist")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("line")
                .short('l')
                .long("line")
                .value_name("LINE")
                .help("Jump to line (1-based, negative counts from the end)")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
        )
        .arg(
            Arg::new("column")
                .short('c')
                .long("column")
                .value_name("COLUMN")
                .help("Jump to column (0-based)")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "cot");
    }

    #[test]
    fn test_cli_no_arguments() {
        let matches = build_cli().try_get_matches_from(vec!["cot"]).unwrap();
        assert!(matches.get_many::<PathBuf>("files").is_none());
        assert!(!matches.get_flag("wait"));
        assert!(!matches.get_flag("new"));
        assert!(!matches.get_flag("background"));
        assert!(matches.get_one::<i64>("line").is_none());
    }

    #[test]
    fn test_cli_multiple_files() {
        let matches = build_cli()
            .try_get_matches_from(vec!["cot", "a.txt", "dir/b.txt"])
            .unwrap();
        let files: Vec<&PathBuf> = matches.get_many::<PathBuf>("files").unwrap().collect();
        assert_eq!(files, vec![&PathBuf::from("a.txt"), &PathBuf::from("dir/b.txt")]);
    }

    #[test]
    fn test_cli_short_flags() {
        let matches = build_cli()
            .try_get_matches_from(vec!["cot", "-w", "-g", "-n", "notes.md"])
            .unwrap();
        assert!(matches.get_flag("wait"));
        assert!(matches.get_flag("background"));
        assert!(matches.get_flag("new"));
    }

    #[test]
    fn test_cli_version_short_flag() {
        let matches = build_cli().try_get_matches_from(vec!["cot", "-v"]).unwrap();
        assert!(matches.get_flag("version"));
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_verbose_long_flag() {
        let matches = build_cli()
            .try_get_matches_from(vec!["cot", "--verbose", "a.txt"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
        assert!(!matches.get_flag("version"));
    }

    #[test]
    fn test_cli_line_and_column() {
        let matches = build_cli()
            .try_get_matches_from(vec!["cot", "a.txt", "-l", "12", "--column", "4"])
            .unwrap();
        assert_eq!(matches.get_one::<i64>("line"), Some(&12));
        assert_eq!(matches.get_one::<i64>("column"), Some(&4));
    }

    #[test]
    fn test_cli_negative_line() {
        let matches = build_cli()
            .try_get_matches_from(vec!["cot", "a.txt", "-l", "-1"])
            .unwrap();
        assert_eq!(matches.get_one::<i64>("line"), Some(&-1));
    }

    #[test]
    fn test_cli_invalid_line() {
        let result = build_cli().try_get_matches_from(vec!["cot", "-l", "ten"]);
        assert!(result.is_err());
    }
}
