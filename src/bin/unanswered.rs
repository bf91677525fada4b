use std::io;

use soq::api::{HttpClient, fetch_recent_unanswered};
use soq::output::print_unanswered;

fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let client = HttpClient::new();
    let questions = fetch_recent_unanswered(&client);
    print_unanswered(&mut io::stdout(), &questions)?;
    Ok(())
}
