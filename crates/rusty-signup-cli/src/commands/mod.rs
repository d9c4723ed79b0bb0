pub mod login;
pub mod register;
pub mod users;

use colored::Colorize;
use rusty_signup::FormResponse;

/// Print a flow result the way the page would show it; returns `response.ok`
pub fn report(response: &FormResponse) -> bool {
    if response.ok {
        println!("{} {}", "✓".green().bold(), response.message.green());
    } else {
        match response.field {
            Some(field) => eprintln!(
                "{} {} {}",
                "✗".red().bold(),
                format!("[{}]", field).dimmed(),
                response.message.red()
            ),
            None => eprintln!("{} {}", "✗".red().bold(), response.message.red()),
        }
    }

    response.ok
}
