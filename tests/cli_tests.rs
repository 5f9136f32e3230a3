// Argument handling for both binaries.
use chrono::NaiveDate;
use stakecal::CalendarError;
use stakecal::cli::{CliAction, TwoWeekArgs, parse_two_week_args, parse_upcoming_args};
use stakecal::model::{InputFormat, Ward};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_no_arguments_gives_defaults() {
    assert_eq!(parse_two_week_args(args(&[])), CliAction::Run(TwoWeekArgs::default()));
    let CliAction::Run(defaults) = parse_two_week_args(args(&[])) else {
        panic!("expected Run");
    };
    assert_eq!(defaults.format, InputFormat::Agenda, "agenda text is the default input");
}

#[test]
fn test_paths_and_verbose() {
    let CliAction::Run(parsed) = parse_two_week_args(args(&[
        "--root", "/srv/bulletin", "--input", "Dec.docx", "--output", "out.docx", "-v", "-wGG",
    ])) else {
        panic!("expected Run");
    };
    assert_eq!(parsed.root.as_deref(), Some(std::path::Path::new("/srv/bulletin")));
    assert_eq!(parsed.input.as_deref(), Some("Dec.docx"));
    assert_eq!(parsed.output.as_deref(), Some("out.docx"));
    assert!(parsed.verbose);
    assert_eq!(parsed.ward, Some(Ward::GardenGrove));
}

#[test]
fn test_start_date_forms() {
    let CliAction::Run(parsed) = parse_two_week_args(args(&["01/04/2024"])) else {
        panic!("expected Run");
    };
    assert_eq!(parsed.start, NaiveDate::from_ymd_opt(2024, 1, 4));

    assert_eq!(
        parse_two_week_args(args(&["1/4/2024", "1/11/2024"])),
        CliAction::Usage(CalendarError::InvalidArgument("1/11/2024".into())),
        "only one start date is accepted"
    );
    assert_eq!(
        parse_two_week_args(args(&["2024-01-04"])),
        CliAction::Usage(CalendarError::InvalidArgument("2024-01-04".into()))
    );
}

#[test]
fn test_start_date_needs_a_four_digit_year() {
    for bad in ["12/7/23", "12/7/+2023", "12/7/02023", "13/1/2024", "2/30/2024"] {
        assert_eq!(
            parse_two_week_args(args(&[bad])),
            CliAction::Usage(CalendarError::InvalidArgument(bad.into())),
            "'{}' must be rejected",
            bad
        );
    }
    let CliAction::Run(parsed) = parse_two_week_args(args(&["12/7/2023"])) else {
        panic!("expected Run");
    };
    assert_eq!(parsed.start, NaiveDate::from_ymd_opt(2023, 12, 7));
}

#[test]
fn test_bad_arguments_name_the_culprit() {
    let CliAction::Usage(err) = parse_two_week_args(args(&["-x"])) else {
        panic!("expected Usage");
    };
    assert_eq!(err.to_string(), "Invalid argument passed!  -x");

    let CliAction::Usage(err) = parse_two_week_args(args(&["-wZZ"])) else {
        panic!("expected Usage");
    };
    assert_eq!(err.to_string(), "Invalid ward pattern specified!  ZZ");
}

#[test]
fn test_upcoming_help_and_rejections() {
    assert_eq!(parse_upcoming_args(args(&["--help"])), CliAction::Help);
    assert_eq!(
        parse_upcoming_args(args(&["-o"])),
        CliAction::Usage(CalendarError::InvalidArgument("-o".into())),
        "classic input is a bulletin-only option"
    );
    let CliAction::Run(parsed) = parse_upcoming_args(args(&["-p", "-m"])) else {
        panic!("expected Run");
    };
    assert!(parsed.print && parsed.major);
}
