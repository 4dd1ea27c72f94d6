//! Pattern 5: Observer
//!
//! Office news delivered two ways. In the pull model the channel hoards
//! messages and each employee reads the whole history on demand. In the push
//! model employees subscribe and the channel hands each message to whoever
//! is subscribed when it is published.

use std::io::Write;
use std::rc::Rc;

pub mod pull;
pub mod push;

pub use push::{Employee, NewsChannel, Subscriber};

use crate::Result;

pub const OFFICE_MESSAGE: &str = "Run out of toilet paper!";
pub const FUNNY_MESSAGE: &str = "Why do ghosts ride the elevator? To lift their spirits.";

pub fn default_employees() -> Vec<String> {
    ["BILLY", "MANDY", "GRIM"].map(String::from).to_vec()
}

/// The first employee reads both channels.
pub fn pull_example(
    employees: &[String],
    office_message: &str,
    funny_message: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let mut office_news = pull::NewsChannel::new();
    let mut funny_news = pull::NewsChannel::new();

    let staff: Vec<pull::Employee> = employees.iter().map(pull::Employee::new).collect();

    office_news.publish_message(office_message);
    funny_news.publish_message(funny_message);

    if let Some(first) = staff.first() {
        first.retrieve_messages(&office_news, out)?;
        first.retrieve_messages(&funny_news, out)?;
    }
    Ok(())
}

/// Everyone subscribes to office news; only the first employee to the funny one.
pub fn push_example(
    employees: &[String],
    office_message: &str,
    funny_message: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let mut office_news = NewsChannel::new();
    let mut funny_news = NewsChannel::new();

    let staff: Vec<Rc<dyn Subscriber>> = employees
        .iter()
        .map(|name| Rc::new(Employee::new(name.as_str())) as Rc<dyn Subscriber>)
        .collect();

    for employee in &staff {
        office_news.subscribe(Rc::clone(employee));
    }
    if let Some(first) = staff.first() {
        funny_news.subscribe(Rc::clone(first));
    }

    office_news.publish_message(office_message, out)?;
    funny_news.publish_message(funny_message, out)?;
    Ok(())
}
