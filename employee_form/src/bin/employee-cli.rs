use clap::{crate_version, App, AppSettings, Arg, ArgMatches, SubCommand};
use employee_form::config::Config;
use employee_form::errors::ApplicationError;
use employee_form::*;
use log::Level::*;
use logging::jlog;
use std::path::Path;
use std::process;

pub fn main() {
    let environment = match Config::parse_environment() {
        Ok(environment) => environment,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2);
        }
    };
    let config = Config::new(environment);
    if let Err(err) = logging::setup_logger(&config.log_level) {
        eprintln!("Could not set up logging: {}", err);
    }
    jlog!(Info, "Environment loaded", { "environment": format!("{:?}", environment) });

    let matches = App::new("Employee Form CLI")
        .version(crate_version!())
        .about("Fills in the employee form and submits it to the employee service")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("submit")
                .about("Validates the form and posts it to the employee service")
                .args(&field_args()),
        )
        .subcommand(
            SubCommand::with_name("check")
                .about("Validates the form without sending it")
                .args(&field_args()),
        )
        .subcommand(SubCommand::with_name("fields").about("Lists the form fields"))
        .subcommand(SubCommand::with_name("version").about("Get the current version"))
        .get_matches();

    let code = match matches.subcommand() {
        ("submit", Some(args)) => submit(&config, args),
        ("check", Some(args)) => check(args),
        ("fields", Some(_)) => fields(),
        ("version", Some(_)) => version(),
        _ => {
            eprintln!("Invalid subcommand '{}'", matches.subcommand().0);
            2
        }
    };
    process::exit(code);
}

fn field_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    Field::ALL
        .iter()
        .map(|field| {
            Arg::with_name(field.id())
                .long(field.flag())
                .takes_value(true)
                .value_name(if field.is_text() { "TEXT" } else { "PATH" })
                .help(field.label())
        })
        .collect()
}

/// Replays the arguments as field changes, in form order, printing any
/// warning the change handler raises.
fn fill<F>(args: &ArgMatches, mut apply: F) -> Result<(), ApplicationError>
where
    F: FnMut(FieldChange) -> Option<Notice>,
{
    for field in Field::ALL.iter() {
        let raw = match args.value_of(field.id()) {
            Some(raw) => raw,
            None => continue,
        };
        let change = if field.is_text() {
            FieldChange::from_input(*field, raw)?
        } else {
            FieldChange::Picture(vec![read_picture(Path::new(raw))?])
        };
        if let Some(notice) = apply(change) {
            println!("{}: {}", field.label(), notice);
        }
    }
    Ok(())
}

fn submit(config: &Config, args: &ArgMatches) -> i32 {
    let client = match config.api_client() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{}", err);
            return 2;
        }
    };
    let mut form = EmployeeForm::new(client);
    if let Err(err) = fill(args, |change| form.handle_change(change)) {
        eprintln!("{}", err);
        return 2;
    }

    report(form.submit())
}

fn check(args: &ArgMatches) -> i32 {
    let mut snapshot = FormSnapshot::new();
    if let Err(err) = fill(args, |change| handle_change(&mut snapshot, change)) {
        eprintln!("{}", err);
        return 2;
    }

    match validate(&snapshot) {
        Ok(()) => {
            println!("Form is ready to submit");
            0
        }
        Err(validation_error) => report(Notice::Invalid(validation_error)),
    }
}

fn report(notice: Notice) -> i32 {
    if notice.is_failure() {
        eprintln!("{}", notice);
        1
    } else {
        println!("{}", notice);
        0
    }
}

fn fields() -> i32 {
    for field in Field::ALL.iter() {
        println!("{:<12} {}", field.id(), field.label());
    }
    0
}

fn version() -> i32 {
    const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("{}", APP_VERSION);
    0
}
