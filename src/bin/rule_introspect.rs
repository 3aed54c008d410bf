use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgMatches, Command};
use rule_introspect::{
    EngineConfig, ManifestParser, PaymentFactory, User, ValidationEngine, ValidationReport,
};
use std::fs;

fn cli() -> Command {
    Command::new("rule-introspect")
        .version(rule_introspect::VERSION)
        .about("Validate objects against declared rules and create payment processors by key")
        .subcommand_required(true)
        .subcommand(
            Command::new("validate")
                .about("Validate a user sign-up")
                .arg(
                    Arg::new("username")
                        .short('u')
                        .long("username")
                        .value_name("NAME")
                        .default_value(""),
                )
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .value_name("ADDRESS")
                        .default_value(""),
                )
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .value_name("SECRET")
                        .default_value(""),
                ),
        )
        .subcommand(
            Command::new("validate-json")
                .about("Validate a JSON document against a rule manifest")
                .arg(
                    Arg::new("manifest")
                        .short('m')
                        .long("manifest")
                        .value_name("FILE")
                        .help("Rule manifest (JSON, or YAML with the yaml-support feature)")
                        .required(true),
                )
                .arg(
                    Arg::new("target")
                        .short('t')
                        .long("target")
                        .value_name("NAME")
                        .help("Target name inside the manifest")
                        .required(true),
                )
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .value_name("FILE")
                        .help("JSON document to validate")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("pay")
                .about("Process an amount with a payment processor")
                .arg(
                    Arg::new("processor")
                        .short('k')
                        .long("processor")
                        .value_name("KEY")
                        .required(true),
                )
                .arg(
                    Arg::new("amount")
                        .short('a')
                        .long("amount")
                        .value_name("AMOUNT")
                        .value_parser(value_parser!(f64))
                        .required(true),
                ),
        )
        .subcommand(Command::new("processors").about("List registered payment processors"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = cli().get_matches();
    let success = match matches.subcommand() {
        Some(("validate", args)) => validate_user(args),
        Some(("validate-json", args)) => validate_json(args)?,
        Some(("pay", args)) => pay(args)?,
        Some(("processors", _)) => {
            let factory = PaymentFactory::new()?;
            println!(
                "Available payment processors: {}",
                factory.available_processors().join(", ")
            );
            true
        }
        _ => unreachable!("subcommand_required is set"),
    };

    if !success {
        std::process::exit(1);
    }
    Ok(())
}

fn arg<'a>(args: &'a ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name).map(String::as_str).unwrap_or_default()
}

fn print_report(report: &ValidationReport) {
    if report.valid {
        println!(
            "{} is valid ({} fields, {} rules)",
            report.target, report.fields_validated, report.rules_evaluated
        );
        return;
    }

    println!("{} validation errors:", report.target);
    for message in report.messages() {
        println!("  - {}", message);
    }
}

fn validate_user(args: &ArgMatches) -> bool {
    let user = User::new(arg(args, "username"), arg(args, "email"), arg(args, "password"));
    let report = ValidationEngine::new().report(&user);
    print_report(&report);
    report.valid
}

fn validate_json(args: &ArgMatches) -> anyhow::Result<bool> {
    let manifest = ManifestParser::load_and_validate(arg(args, "manifest"))?;

    let input = arg(args, "input");
    let content = fs::read_to_string(input).with_context(|| format!("reading {}", input))?;
    let document: serde_json::Value =
        serde_json::from_str(&content).with_context(|| format!("parsing {}", input))?;

    let bound = manifest.bind(arg(args, "target"), &document)?;
    let report = ValidationEngine::with_config(EngineConfig::strict())?.try_report(&bound)?;
    print_report(&report);
    Ok(report.valid)
}

fn pay(args: &ArgMatches) -> anyhow::Result<bool> {
    let factory = PaymentFactory::new()?;
    let processor = factory.create(arg(args, "processor"))?;

    let Some(amount) = args.get_one::<f64>("amount").copied() else {
        bail!("--amount is required");
    };

    let processed = processor.process(amount);
    println!(
        "{}: {}",
        processor.display_name(),
        if processed { "processed" } else { "declined" }
    );
    Ok(processed)
}
