use clargs::{Arg, CommandLineArguments, Count, LookupError, PrintHelp};

fn main() -> Result<(), LookupError> {
    let mut registry = CommandLineArguments::new()
        .usage("Usage: {progname} [options] NAME")
        .add(
            Arg::<String>::new('g', "greeting")
                .default("Hello".to_string())
                .help("The greeting to use."),
        )
        .add(
            Arg::<u32>::new('n', "times")
                .default(1)
                .help("How many times to greet."),
        )
        .add(Arg::<bool>::long("shout").help("Greet in upper case."))
        .add(Arg::<Count>::short('v').help("Explain what is going on."))
        .add(Arg::<PrintHelp>::new('h', "help").help("Show this help message."))
        .min_positional(1)
        .max_positional(1)
        .build();
    registry.parse();

    let name = &registry.positional()[0];
    let mut message = format!("{}, {name}!", registry.get::<String>("greeting")?);

    if *registry.get::<bool>("shout")? {
        message = message.to_uppercase();
    }

    if registry.get::<Count>('v')?.value() > 0 {
        eprintln!("{}", registry.report());
    }

    for _ in 0..*registry.get::<u32>("times")? {
        println!("{message}");
    }

    Ok(())
}
