mod commands;
mod form;
mod output;
mod session;

use anyhow::Context;

use apex_render::{preview, text};
use commands::{CommandLine, Commands};
use form::InvoiceForm;
use output::{ConsoleNotifier, FilePrinter};

fn main() -> anyhow::Result<()> {
    apex_observability::init();

    let cli = CommandLine::parse_args();
    let today = chrono::Local::now().date_naive();
    let defaults = cli.config.session_defaults(today);
    let options = cli.config.render_options();

    match cli.command {
        Commands::Generate { form, output } => {
            let form = InvoiceForm::load(&form)?;
            let wizard = session::fill(&form, defaults, options, ConsoleNotifier)
                .context("form rejected")?;

            let mut printer = FilePrinter::new(output);
            wizard.print(&mut printer).context("failed to print invoice")?;
        }
        Commands::Preview { form, html } => {
            let form = InvoiceForm::load(&form)?;
            let wizard = session::fill(&form, defaults, options, ConsoleNotifier)
                .context("form rejected")?;

            if html {
                println!("{}", preview::render_html(wizard.draft())?);
            } else if let Some(tree) = wizard.preview() {
                println!("{}", text::write(tree));
            }
        }
    }
    Ok(())
}
