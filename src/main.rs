use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use stylecraft::preview::render_variants;
use stylecraft::{
    build_theme, set_appearance_detector, user_menu_button, AdaptiveScheme, Appearance,
    ColorScheme, SchemeChoice, StyleValidationError, Toggleable, BUILTIN_SCHEMES,
};

#[derive(Parser, Debug)]
#[command(name = "stylecraft", version, about = "Build component style trees from color schemes")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the full theme tree
    Build {
        #[command(flatten)]
        scheme: SchemeArgs,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// List every resolved state of the user menu button
    States {
        #[command(flatten)]
        scheme: SchemeArgs,

        /// Show the offline variant
        #[arg(long)]
        offline: bool,

        /// Disable color swatches
        #[arg(long)]
        no_color: bool,
    },
    /// List the built-in scheme names
    Schemes,
}

#[derive(Args, Debug)]
struct SchemeArgs {
    /// Built-in scheme name or path to a .yaml/.yml/.json scheme file
    #[arg(long)]
    scheme: Option<String>,

    /// Which built-in scheme to use when --scheme is not given
    #[arg(long, value_enum, default_value_t = AppearanceArg::Auto, conflicts_with = "scheme")]
    appearance: AppearanceArg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum AppearanceArg {
    Auto,
    Light,
    Dark,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Scheme source selected on the command line.
enum Selected {
    Fixed(ColorScheme),
    Adaptive(AdaptiveScheme),
}

impl Selected {
    fn choice(&self) -> SchemeChoice<'_> {
        match self {
            Selected::Fixed(scheme) => SchemeChoice::Fixed(scheme),
            Selected::Adaptive(adaptive) => SchemeChoice::Adaptive(adaptive),
        }
    }
}

fn select_scheme(args: &SchemeArgs) -> Result<Selected> {
    if let Some(name) = &args.scheme {
        let scheme = ColorScheme::from_name_or_path(name)
            .with_context(|| format!("loading scheme '{}'", name))?;
        debug!(name = %scheme.name, "using fixed scheme");
        return Ok(Selected::Fixed(scheme));
    }

    match args.appearance {
        AppearanceArg::Auto => {}
        AppearanceArg::Light => set_appearance_detector(|| Appearance::Light),
        AppearanceArg::Dark => set_appearance_detector(|| Appearance::Dark),
    }
    Ok(Selected::Adaptive(AdaptiveScheme::builtin()?))
}

/// Logs a warning when the button's overlays do not match its base.
fn check_button(button: &Toggleable) -> Option<StyleValidationError> {
    let err = button.validate().err()?;
    warn!("user menu button: {}", err);
    Some(err)
}

/// Runs a command and returns what it would print.
fn dispatch(command: Command) -> Result<String> {
    let out = match command {
        Command::Build {
            scheme,
            format,
            compact,
        } => {
            let selected = select_scheme(&scheme)?;
            let theme = build_theme(selected.choice().resolve());
            match format {
                Format::Json => theme.to_json(!compact)?,
                Format::Yaml => theme.to_yaml()?,
            }
        }
        Command::States {
            scheme,
            offline,
            no_color,
        } => {
            let selected = select_scheme(&scheme)?;
            let scheme = selected.choice().resolve();
            let button = user_menu_button(scheme, !offline);
            check_button(&button);
            let use_color = !no_color && console::colors_enabled();
            let title = format!(
                "{} / userMenuButton{}",
                scheme.name,
                if offline { "Offline" } else { "Online" }
            );
            render_variants(&title, &button, use_color)
        }
        Command::Schemes => BUILTIN_SCHEMES.join("\n") + "\n",
    };
    Ok(out)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let out = dispatch(cli.command)?;
    print!("{}", out);
    if !out.ends_with('\n') {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use stylecraft::{detect_appearance, toggleable, Color, StyleMap};

    fn parse(args: &[&str]) -> Command {
        let argv = std::iter::once("stylecraft").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn test_build_defaults() {
        match parse(&["build"]) {
            Command::Build {
                scheme,
                format,
                compact,
            } => {
                assert!(scheme.scheme.is_none());
                assert_eq!(scheme.appearance, AppearanceArg::Auto);
                assert_eq!(format, Format::Json);
                assert!(!compact);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["stylecraft", "schemes", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_scheme_and_appearance_conflict() {
        let err = Cli::try_parse_from([
            "stylecraft",
            "build",
            "--scheme",
            "one-dark",
            "--appearance",
            "light",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["stylecraft", "build", "--format", "toml"]).is_err());
    }

    #[test]
    fn test_select_builtin_by_name() {
        let args = SchemeArgs {
            scheme: Some("one-light".into()),
            appearance: AppearanceArg::Auto,
        };
        let selected = select_scheme(&args).unwrap();
        assert!(matches!(selected, Selected::Fixed(_)));
        assert_eq!(selected.choice().resolve().name, "One Light");
    }

    #[test]
    fn test_select_scheme_from_path() {
        let mut scheme = ColorScheme::builtin("one-dark").unwrap();
        scheme.name = "Custom".into();
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(serde_yaml::to_string(&scheme).unwrap().as_bytes())
            .unwrap();

        let args = SchemeArgs {
            scheme: Some(file.path().to_string_lossy().into_owned()),
            appearance: AppearanceArg::Auto,
        };
        let selected = select_scheme(&args).unwrap();
        assert_eq!(selected.choice().resolve().name, "Custom");
    }

    #[test]
    fn test_select_missing_path_reports_name() {
        let args = SchemeArgs {
            scheme: Some("missing.yaml".into()),
            appearance: AppearanceArg::Auto,
        };
        let err = select_scheme(&args).err().unwrap();
        assert!(format!("{:#}", err).contains("missing.yaml"));
    }

    #[test]
    #[serial]
    fn test_appearance_flag_overrides_detector() {
        let args = SchemeArgs {
            scheme: None,
            appearance: AppearanceArg::Dark,
        };
        let selected = select_scheme(&args).unwrap();
        assert_eq!(detect_appearance(), Appearance::Dark);
        assert_eq!(selected.choice().resolve().name, "One Dark");

        let args = SchemeArgs {
            scheme: None,
            appearance: AppearanceArg::Light,
        };
        let selected = select_scheme(&args).unwrap();
        assert_eq!(selected.choice().resolve().name, "One Light");
    }

    #[test]
    #[serial]
    fn test_build_json_pretty_and_compact() {
        let pretty = dispatch(parse(&["build", "--appearance", "dark"])).unwrap();
        assert!(pretty.contains("\n  \"meta\""));
        assert!(pretty.contains("\"name\": \"One Dark\""));

        let compact = dispatch(parse(&["build", "--appearance", "dark", "--compact"])).unwrap();
        assert!(!compact.contains('\n'));
        assert!(compact.contains("\"userMenuButtonOnline\""));
    }

    #[test]
    fn test_build_yaml() {
        let out = dispatch(parse(&["build", "--scheme", "one-light", "--format", "yaml"])).unwrap();
        assert!(out.starts_with("meta:"));
        assert!(out.contains("userMenuButtonOffline:"));
    }

    #[test]
    fn test_states_plain_listing() {
        let out = dispatch(parse(&[
            "states",
            "--scheme",
            "one-dark",
            "--offline",
            "--no-color",
        ]))
        .unwrap();
        assert!(out.starts_with("One Dark / userMenuButtonOffline\n"));
        assert!(out.contains("active.clicked"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_schemes_lists_builtins() {
        let out = dispatch(parse(&["schemes"])).unwrap();
        assert_eq!(out, "one-dark\none-light\n");
    }

    #[test]
    fn test_check_button_reports_invalid_overlay() {
        let button = toggleable(
            StyleMap::new().with("background", Color::rgb(0, 0, 0)),
            StyleMap::new().with("border", Color::rgb(1, 1, 1)),
        );
        let err = check_button(&button).unwrap();
        assert!(err.to_string().contains("border"));
    }

    #[test]
    fn test_check_button_accepts_builtin_button() {
        let scheme = ColorScheme::builtin("one-dark").unwrap();
        assert!(check_button(&user_menu_button(&scheme, true)).is_none());
    }
}
