use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use apex_render::RenderOptions;
use apex_wizard::SessionDefaults;

#[derive(Parser)]
#[command(name = "apex-invoice")]
#[command(about = "Build a printable invoice from a filled-in form.")]
pub struct CommandLine {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the wizard on FORM and write the printable HTML invoice
    #[command(alias = "g")]
    Generate {
        form: PathBuf,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the wizard on FORM and show the step 3 preview
    #[command(alias = "p")]
    Preview {
        form: PathBuf,
        /// Print the HTML fragment instead of plain text
        #[arg(long)]
        html: bool,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Brand shown in the document header
    #[arg(long, global = true, env = "APEX_BRAND_NAME")]
    pub brand_name: Option<String>,

    /// Line printed at the bottom of the document
    #[arg(long, global = true, env = "APEX_FOOTER")]
    pub footer: Option<String>,

    /// Days between the invoice date and the default due date
    #[arg(
        long,
        global = true,
        env = "APEX_DUE_DAYS",
        default_value_t = SessionDefaults::DEFAULT_DUE_IN_DAYS
    )]
    pub due_days: u64,
}

impl Config {
    pub fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            brand_name: self.brand_name.clone().unwrap_or(defaults.brand_name),
            footer: self.footer.clone().unwrap_or(defaults.footer),
        }
    }

    pub fn session_defaults(&self, today: chrono::NaiveDate) -> SessionDefaults {
        SessionDefaults::starting(today, self.due_days)
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn generate_with_output_and_branding() {
        let cli = CommandLine::try_parse_from([
            "apex-invoice",
            "generate",
            "form.json",
            "-o",
            "out.html",
            "--brand-name",
            "Acme Billing",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate { form, output } => {
                assert_eq!(form, PathBuf::from("form.json"));
                assert_eq!(output, Some(PathBuf::from("out.html")));
            }
            Commands::Preview { .. } => panic!("expected generate"),
        }
        let options = cli.config.render_options();
        assert_eq!(options.brand_name, "Acme Billing");
        assert_eq!(options.footer, RenderOptions::default().footer);
    }

    #[test]
    fn due_days_default_to_thirty() {
        let cli = CommandLine::try_parse_from(["apex-invoice", "preview", "form.json"]).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

        let defaults = cli.config.session_defaults(today);
        assert_eq!(defaults.invoice_date, today);
        assert_eq!(defaults.due_date, NaiveDate::from_ymd_opt(2026, 2, 4).unwrap());
    }

    #[test]
    fn preview_defaults_to_text() {
        let cli = CommandLine::try_parse_from(["apex-invoice", "p", "form.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Preview { html: false, .. }));

        let cli =
            CommandLine::try_parse_from(["apex-invoice", "preview", "form.json", "--html"]).unwrap();
        assert!(matches!(cli.command, Commands::Preview { html: true, .. }));
    }

    #[test]
    fn form_path_is_required() {
        assert!(CommandLine::try_parse_from(["apex-invoice", "generate"]).is_err());
    }
}
