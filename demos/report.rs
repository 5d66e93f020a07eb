use clargs::{Arg, CommandLineArguments, Count, LookupError, PrintHelp, Registry};

fn main() -> Result<(), LookupError> {
    let mut registry = CommandLineArguments::new()
        .usage("Usage: {progname} [options]")
        .add(Arg::<bool>::long("test").help("run the regression checks"))
        .add(Arg::<String>::long("str-long").help("str long help"))
        .add(
            Arg::<String>::long("str-long-default")
                .default("long-default".to_string())
                .help("str-long-default help"),
        )
        .add(Arg::<String>::new('z', "zzz").help("zzz help"))
        .add(Arg::<String>::short('s').help("str short help"))
        .add(Arg::<i32>::new('i', "int").help("int help"))
        .add(Arg::<i32>::long("ii").default(666).help("ii help"))
        .add(Arg::<f64>::long("dd").default(1.0 / 3.0).help("dd help"))
        .add(Arg::<bool>::new('t', "true").help("true help"))
        .add(Arg::<bool>::new('f', "false").default(true).help("false help"))
        .add(Arg::<Count>::new('v', "verbose"))
        .add(Arg::<PrintHelp>::new('h', "help").help("print help"))
        .build();
    registry.parse();

    if *registry.get::<bool>("test")? {
        if regression() {
            println!("regression passed");
        } else {
            std::process::exit(1);
        }
    } else {
        println!("{}", registry.report());
        println!("get str-long: {}", registry.get::<String>("str-long")?);
        println!("find i: {}", registry.get::<i32>('i')?);
        println!("find v: {}", registry.get::<Count>('v')?);
        println!("find v: {}", registry.get::<Count>('v')?.value());
    }

    Ok(())
}

fn regression() -> bool {
    let checks = [
        (
            vec!["progname"],
            "aa= bb=cc ee= g= int=0 ii=666 dd=0.3333333333333333 true=false false=true help=\nARGS (0):",
        ),
        (
            vec![
                "progname",
                "--true",
                "--aa",
                "aaaa",
                "argument1",
                "--dd=11.11",
                "argument2",
                "-g",
                "ggggg gggg",
            ],
            "aa=aaaa bb=cc ee= g=ggggg gggg int=0 ii=666 dd=11.11 true=true false=true help=\nARGS (2): argument1 argument2",
        ),
    ];
    let mut passed = true;

    for (args, expected) in checks {
        let mut registry = regression_registry();

        match registry.parse_args(args) {
            Ok(()) if registry.report() == expected => {}
            Ok(()) => {
                eprintln!("{}", registry.report());
                eprintln!("regression FAILED: {expected}");
                passed = false;
            }
            Err(e) => {
                eprintln!("Parse error: {e}");
                passed = false;
            }
        }
    }

    passed
}

fn regression_registry() -> Registry {
    CommandLineArguments::new()
        .add(Arg::<String>::long("aa"))
        .add(Arg::<String>::long("bb").default("cc".to_string()).help("dd"))
        .add(Arg::<String>::new('e', "ee").help("ff"))
        .add(Arg::<String>::short('g').help("hh"))
        .add(Arg::<i32>::new('i', "int").help("int"))
        .add(Arg::<i32>::long("ii").default(666).help("ii"))
        .add(Arg::<f64>::long("dd").default(1.0 / 3.0).help("dd"))
        .add(Arg::<bool>::new('t', "true").help("true help"))
        .add(Arg::<bool>::new('f', "false").default(true).help("false help"))
        .add(Arg::<PrintHelp>::new('h', "help").help("print help"))
        .build()
}
