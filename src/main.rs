mod cli;
mod configuration;
mod logger;

use std::fs;
use std::io;
use std::io::Read;
use std::process::exit;

use auth0_mgmt_jobs::jobs::Job;
use auth0_mgmt_jobs::json;
use cli::Application;
use configuration::Configuration;
use log::{debug, error, info};
use logger::Logger;

fn main() {
    let arguments = Application::handle_arguments();
    let configuration = match Configuration::new(arguments.configuration_path.as_deref()) {
        Ok(configuration) => configuration,
        Err(message) => {
            eprintln!("Unable to load the configuration: {}", message);
            exit(1);
        },
    };
    Logger::initialize(configuration.log.level.into());
    debug!("Configuration loaded: {:?}.", configuration);

    let input = match read_input(arguments.input_path.as_deref()) {
        Ok(input) => input,
        Err(error) => {
            error!("Unable to read the job payload: {}.", error);
            exit(1);
        },
    };
    let job: Job = match json::from_json(&input) {
        Ok(job) => job,
        Err(error) => {
            error!("Unable to decode the job payload: {}.", error);
            exit(2);
        },
    };
    info!("Job {} decoded.", job.get_id().unwrap_or("<unknown>"));

    for (name, value) in describe(&job) {
        println!("{}: {}", name, value);
    }
}

/// Read the whole payload from the given file, or from the standard input.
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;

            Ok(input)
        },
    }
}

/// List the attributes set on the given job, by their wire name.
fn describe(job: &Job) -> Vec<(&'static str, String)> {
    let mut attributes = vec![];
    let mut push = |name, value: Option<String>| {
        if let Some(value) = value {
            attributes.push((name, value));
        }
    };

    push("id", job.get_id().map(String::from));
    push("type", job.get_type().map(String::from));
    push("status", job.get_status().map(String::from));
    push("created_at", job.get_created_at().map(json::format_date));
    push("connection_id", job.get_connection_id().map(String::from));
    push("connection", job.get_connection().map(String::from));
    push("format", job.get_format().map(String::from));
    push("location", job.get_location().map(String::from));
    push("percentage_done", job.get_percentage_done().map(|value| value.to_string()));
    push("time_left_seconds", job.get_time_left_seconds().map(|value| value.to_string()));
    push("external_id", job.get_external_id().map(String::from));
    if let Some(summary) = job.get_summary() {
        push("summary.failed", summary.get_failed().map(|value| value.to_string()));
        push("summary.updated", summary.get_updated().map(|value| value.to_string()));
        push("summary.inserted", summary.get_inserted().map(|value| value.to_string()));
        push("summary.total", summary.get_total().map(|value| value.to_string()));
    }

    attributes
}
