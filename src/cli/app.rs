use super::commands::ExportArgs;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "leetcode-export", version)]
#[command(about = "Fetch leetcode problems and output them to a CSV file")]
pub struct Cli {
    #[command(flatten)]
    pub export: ExportArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["leetcode-export"]).unwrap();

        assert_eq!(cli.export.batch_size, 300);
        assert_eq!(cli.export.output, PathBuf::from("problems.csv"));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "leetcode-export",
            "--batch-size",
            "50",
            "--output",
            "/tmp/out.csv",
        ])
        .unwrap();

        assert_eq!(cli.export.batch_size, 50);
        assert_eq!(cli.export.output, PathBuf::from("/tmp/out.csv"));
    }

    #[test]
    fn test_batch_size_must_be_positive() {
        assert!(Cli::try_parse_from(["leetcode-export", "--batch-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["leetcode-export", "--batch-size", "-3"]).is_err());
        assert!(Cli::try_parse_from(["leetcode-export", "--batch-size", "ten"]).is_err());
    }

    #[test]
    fn test_unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["leetcode-export", "--offset", "10"]).is_err());
    }
}
