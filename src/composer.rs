//! Ties the pieces together: greets, loads the configured URL and writes
//! what came back to an output sink.
//!
//! The fetch line is written the same way whether the load worked or not;
//! the [`Outcome`] is simply rendered after `Content is `. Only a failing
//! sink is reported as an error.

use std::io::{self, Write};

use crate::config::AppConfig;
use crate::greeting;
use crate::net::{load_url, HttpClient};
use crate::outcome::Outcome;

pub struct Composer<C, W> {
    client: C,
    sink: W,
}

impl<C: HttpClient, W: Write> Composer<C, W> {
    pub fn new(client: C, sink: W) -> Self {
        Self { client, sink }
    }

    /// Writes the greeting for `name` and its shouted form, one line each.
    pub fn greet(&mut self, name: &str) -> io::Result<()> {
        let msg = greeting::generate(name);
        writeln!(self.sink, "{msg}")?;
        writeln!(self.sink, "{}", greeting::magical(&msg))?;
        Ok(())
    }

    /// Loads `url` and writes a single `Content is ...` line.
    pub async fn report(&mut self, url: &str) -> io::Result<Outcome> {
        log::info!("Loading {url}");
        let content = load_url(&self.client, url).await;
        writeln!(self.sink, "Content is {content}")?;
        self.sink.flush()?;
        Ok(content)
    }

    pub async fn run(&mut self, config: &AppConfig) -> io::Result<Outcome> {
        self.greet(&config.name)?;
        self.report(&config.url).await
    }

    pub fn into_sink(self) -> W {
        self.sink
    }
}
