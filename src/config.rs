use std::io::BufRead;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use crate::ScreenSize;
use crate::camera::CameraPolicy;
use crate::camera::Viewport;
use crate::rule_set;
use crate::rule_set::RulePreset;
use crate::rule_set::RuleSet;

#[derive(Debug, Parser)]
#[command(name = "lifecam", version, about = "Step through a Game of Life map in the terminal")]
pub struct Args {
    /// Path to the map file. `X` marks a live cell, anything else is dead
    pub map_file: PathBuf,

    /// Survival rules: 1 (weak cells), 2 (tough cells) or a rulestring like b3/s23. Asked for
    /// interactively when missing
    #[arg(short, long)]
    pub rules: Option<String>,

    /// How the view follows the pattern
    #[arg(short, long, value_enum, default_value_t = CameraPolicy::Center)]
    pub camera: CameraPolicy,

    /// Width of the view, in cells
    #[arg(long, default_value_t = 150, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: ScreenSize,

    /// Height of the view, in cells
    #[arg(long, default_value_t = 35, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: ScreenSize,

    /// Advance automatically every MILLIS milliseconds instead of waiting for ENTER
    #[arg(long, value_name = "MILLIS")]
    pub auto: Option<u64>,

    /// Stop after this many generations when running automatically
    #[arg(long, requires = "auto")]
    pub max_generations: Option<u64>,

    /// Do not clear the terminal between generations
    #[arg(long)]
    pub no_clear: bool,
}

impl Args {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn tick_interval(&self) -> Option<Duration> {
        self.auto.map(Duration::from_millis)
    }

    /// The rules picked with `--rules`, or asked for on `input` when none were given.
    pub fn resolve_rules<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> anyhow::Result<RuleSet> {
        match &self.rules {
            Some(token) => Ok(rule_set::choose_rules(token)?),
            None => prompt_rules(input, output),
        }
    }
}

/// Ask the user to pick one of the rule presets.
///
/// Fails with [`rule_set::ChoiceError::InvalidChoice`] on anything but `1` or `2`.
pub fn prompt_rules<R: BufRead, W: Write>(mut input: R, mut output: W) -> anyhow::Result<RuleSet> {
    writeln!(output, "Choose survival rules:")?;
    writeln!(output, "1. {}", RulePreset::WeakCells.label())?;
    writeln!(output, "2. {}", RulePreset::ToughCells.label())?;
    write!(output, "Enter 1 or 2: ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read rule choice")?;

    let preset: RulePreset = line.trim().parse()?;

    Ok(preset.rule_set())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;

    use super::*;
    use crate::rule_set::ChoiceError;
    use crate::rule_set::TOUGH_CELLS;
    use crate::rule_set::WEAK_CELLS;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["lifecam", "map.txt"]).unwrap();

        assert_eq!(args.map_file, PathBuf::from("map.txt"));
        assert_eq!(args.viewport(), Viewport::new(150, 35));
        assert_eq!(args.camera, CameraPolicy::Center);
        assert_eq!(args.tick_interval(), None);
        assert!(!args.no_clear);
    }

    #[test]
    fn zero_sized_view_is_rejected() {
        assert!(Args::try_parse_from(["lifecam", "map.txt", "--width", "0"]).is_err());
    }

    #[test]
    fn max_generations_needs_auto() {
        assert!(Args::try_parse_from(["lifecam", "m", "--max-generations", "3"]).is_err());

        let args =
            Args::try_parse_from(["lifecam", "m", "--auto", "50", "--max-generations", "3"])
                .unwrap();
        assert_eq!(args.tick_interval(), Some(Duration::from_millis(50)));
        assert_eq!(args.max_generations, Some(3));
    }

    #[test]
    fn prompt_accepts_presets() {
        let mut out = Vec::new();

        let rules = prompt_rules(Cursor::new("1\n"), &mut out).unwrap();
        assert_eq!(rules, WEAK_CELLS);

        let prompt = String::from_utf8(out).unwrap();
        assert!(prompt.contains("1. Weak cells"));
        assert!(prompt.contains("2. Tough cells"));

        let rules = prompt_rules(Cursor::new("2\n"), Vec::new()).unwrap();
        assert_eq!(rules, TOUGH_CELLS);
    }

    #[test]
    fn prompt_rejects_anything_else() {
        let err = prompt_rules(Cursor::new("3\n"), Vec::new()).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ChoiceError>(),
            Some(&ChoiceError::InvalidChoice {
                got: "3".to_string()
            })
        );
    }

    #[test]
    fn rules_flag_skips_the_prompt() {
        let args = Args::try_parse_from(["lifecam", "m", "--rules", "b3/s23"]).unwrap();

        // Nothing to read: the prompt would fail
        let rules = args.resolve_rules(Cursor::new(""), Vec::new()).unwrap();
        assert_eq!(rules, TOUGH_CELLS);
    }
}
