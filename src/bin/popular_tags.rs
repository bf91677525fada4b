use std::{env, fs::File, io};

use soq::api::{HttpClient, fetch_popular_tags};
use soq::config::TAGS_OUTPUT_FILE;
use soq::models::TagsParams;
use soq::output::{print_popular_tags, write_tags_json};

fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        usage(&args[0]);
    }

    let params = match TagsParams::parse(&args[1], &args[2]) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("{err}");
            usage(&args[0]);
        }
    };

    let client = HttpClient::new();
    let tags = fetch_popular_tags(&client, &params);
    print_popular_tags(&mut io::stdout(), &tags)?;

    if !tags.is_empty() {
        let mut file = File::create(TAGS_OUTPUT_FILE)?;
        write_tags_json(&mut file, &tags)?;
        println!("Tags saved to {TAGS_OUTPUT_FILE}");
    }

    Ok(())
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <from_date> <to_date>");
    std::process::exit(1);
}
