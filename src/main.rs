use std::io::{self, BufRead, Write};

use contact_relay::{
    configuration::get_configuration,
    domain::{ClientContext, FormFields},
    presenter::TerminalPresenter,
    startup,
};
use env_logger::Env;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");
    let mut form = startup::build(&configuration, TerminalPresenter::new());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let fields = FormFields {
        name: prompt(&mut lines, "Name")?,
        email: prompt(&mut lines, "Email")?,
        company: prompt(&mut lines, "Company (optional)")?,
        phone: prompt(&mut lines, "Phone (optional)")?,
        message: prompt(&mut lines, "Message")?,
    };

    let outcome = form.handle_submit(&fields, &ClientContext::default()).await;
    log::info!("Submission outcome: {:?}", outcome);

    Ok(())
}

fn prompt(lines: &mut io::Lines<io::StdinLock<'_>>, label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    Ok(lines.next().transpose()?.unwrap_or_default())
}
