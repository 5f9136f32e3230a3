use anyhow::{Context, Result};
use chrono::Local;
use stakecal::cli::{self, CliAction};
use stakecal::config::Config;
use stakecal::context::{AppContext, StandardContext};
use stakecal::model::{Punctuation, ReportingWindow, SkipRules};
use stakecal::pipeline::{BulletinOptions, build_bulletin};
use stakecal::report::{BulletinReport, skipped_events_text};
use stakecal::session::RunSession;
use stakecal::{document, logging, skiplist};
use std::{env, process};

const BINARY_NAME: &str = "stakecal-twoweek";

fn main() -> Result<()> {
    let args = match cli::parse_two_week_args(env::args().skip(1)) {
        CliAction::Run(args) => args,
        CliAction::Help => {
            cli::print_two_week_help(BINARY_NAME);
            return Ok(());
        }
        CliAction::Usage(err) => {
            println!("{}", err);
            println!();
            cli::print_two_week_help(BINARY_NAME);
            process::exit(1);
        }
    };
    logging::init(args.verbose);

    let ctx = StandardContext::new(args.root.clone());
    let config = Config::load(&ctx)?;

    let rules = SkipRules {
        exact: skiplist::load(&ctx.config_file(&config.skip_events_file)?)?,
        contains: skiplist::load(&ctx.config_file(&config.skip_if_contains_file)?)?,
        keep_all: args.keep_all,
        skip_ward_events: false,
    };

    let input = ctx.data_file(args.input.as_deref().unwrap_or(&config.input_file))?;
    let paragraphs = document::read_paragraphs(&input)?;
    log::debug!("Read {} paragraphs from {}", paragraphs.len(), input.display());

    let mut window = match args.start {
        Some(start) => ReportingWindow::two_weeks_from(start),
        None => ReportingWindow::upcoming(Local::now().date_naive()),
    }
    .include_all(args.include_all);

    let options = BulletinOptions {
        format: args.format,
        rules,
        ward: args.ward,
    };
    let bulletin = build_bulletin(&paragraphs, options, &mut window)
        .with_context(|| format!("Could not read events from {}", input.display()))?;

    let punctuation = if args.print {
        Punctuation::Plain
    } else {
        Punctuation::Document
    };
    let mut session = RunSession::new(window, punctuation);
    let report = BulletinReport::render(&bulletin, &mut session);

    if args.print {
        print!("{}", report.to_plain_text());
    } else {
        let output = ctx.data_file(args.output.as_deref().unwrap_or(&config.two_week_output))?;
        report.to_docx(&config.bulletin_font).save(&output)?;
    }

    if !args.keep_all {
        print!("{}", skipped_events_text(&bulletin.tally));
    }
    Ok(())
}
