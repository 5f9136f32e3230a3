use anyhow::{Context, Result};
use stakecal::cli::{self, CliAction};
use stakecal::config::Config;
use stakecal::context::{AppContext, StandardContext};
use stakecal::model::{Punctuation, SkipRules};
use stakecal::pipeline::build_digest;
use stakecal::report::{DigestReport, skipped_events_text};
use stakecal::{document, logging, skiplist};
use std::{env, process};

const BINARY_NAME: &str = "stakecal-upcoming";

fn main() -> Result<()> {
    let args = match cli::parse_upcoming_args(env::args().skip(1)) {
        CliAction::Run(args) => args,
        CliAction::Help => {
            cli::print_upcoming_help(BINARY_NAME);
            return Ok(());
        }
        CliAction::Usage(err) => {
            println!("{}", err);
            println!();
            cli::print_upcoming_help(BINARY_NAME);
            process::exit(1);
        }
    };
    logging::init(args.verbose);

    let ctx = StandardContext::new(args.root.clone());
    let config = Config::load(&ctx)?;

    let (exact_list, default_output) = if args.major {
        (&config.skip_events_major_file, &config.major_output)
    } else {
        (&config.skip_events_upcoming_file, &config.upcoming_output)
    };
    let rules = SkipRules::new(
        skiplist::load(&ctx.config_file(exact_list)?)?,
        skiplist::load(&ctx.config_file(&config.skip_if_contains_file)?)?,
    );

    let input = ctx.data_file(args.input.as_deref().unwrap_or(&config.input_file))?;
    let paragraphs = document::read_paragraphs(&input)?;
    log::debug!("Read {} paragraphs from {}", paragraphs.len(), input.display());

    let digest = build_digest(&paragraphs, rules)
        .with_context(|| format!("Could not read events from {}", input.display()))?;

    if args.print {
        print!("{}", DigestReport::render(&digest, Punctuation::Plain).to_plain_text());
    } else {
        let output = ctx.data_file(args.output.as_deref().unwrap_or(default_output))?;
        DigestReport::render(&digest, Punctuation::Document)
            .to_docx(&config.digest_font, config.digest_font_size)
            .save(&output)?;
    }

    print!("{}", skipped_events_text(&digest.tally));
    Ok(())
}
