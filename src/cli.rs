//! CLI management, parsing CLI arguments given by the user.
//!
//! When arguments cannot get parsed, it exits the program, displaying an appropriate message and
//! returning the proper error code to the parent shell.
//!
//! Handled arguments:
//! * `-c`, `--config`: the path to the configuration file used for the current execution.
//! * `INPUT`: the path to a file holding the JSON payload of a job. The payload is read from the
//! standard input when it is omitted.

use clap::App;
use clap::crate_name;
use clap::crate_version;
use clap::Arg;

pub struct Arguments {
    pub configuration_path: Option<String>,
    pub input_path: Option<String>,
}

pub struct Application {}

impl Application {
    /// Handle current CLI arguments. When arguments cannot get parsed, it exits the program,
    /// displaying the corresponding message, and returning the proper error code.
    pub fn handle_arguments() -> Arguments {
        let matches = App::new(crate_name!())
            .version(crate_version!())
            .arg(
                Arg::new("configuration_path")
                    .short('c')
                    .long("config")
                    .takes_value(true)
                    .value_name("FILE")
                    .help("Sets the path of the configuration file")
            )
            .arg(
                Arg::new("input_path")
                    .index(1)
                    .takes_value(true)
                    .value_name("INPUT")
                    .help("Sets the path of the job payload to read (defaults to stdin)")
            )
            .help_template("USAGE: {usage}\n\n{all-args}")
            .get_matches()
        ;

        Arguments {
            configuration_path: matches.value_of("configuration_path").map(String::from),
            input_path: matches.value_of("input_path").map(String::from),
        }
    }
}
