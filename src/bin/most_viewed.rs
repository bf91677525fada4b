use std::{env, io};

use soq::api::{HttpClient, fetch_most_viewed};
use soq::models::MostViewedParams;
use soq::output::print_most_viewed;

fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        usage(&args[0]);
    }

    let params = match MostViewedParams::parse(&args[1], &args[2], &args[3]) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("{err}");
            usage(&args[0]);
        }
    };

    let client = HttpClient::new();
    let questions = fetch_most_viewed(&client, &params)?;
    print_most_viewed(&mut io::stdout(), &questions)?;
    Ok(())
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <from_date> <to_date> <number_of_questions>");
    std::process::exit(1);
}
