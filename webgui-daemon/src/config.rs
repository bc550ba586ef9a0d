//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

#![allow(clippy::derivable_impls)]

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub database_path: String,
    // JSON document installed when the configuration store is empty.
    pub config_seed: Option<String>,
    pub logging: Logging,
    pub http: Http,
    pub relay: Relay,
    pub switch: Switch,
    pub interfaces: Interfaces,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Logging {
    pub journald: LoggingJournald,
    pub file: LoggingFile,
    pub stdout: LoggingStdout,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingJournald {
    pub enabled: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingFile {
    pub enabled: bool,
    pub dir: String,
    pub name: String,
    pub rotation: LoggingFileRotation,
    #[serde(flatten)]
    pub fmt: LoggingFmt,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingStdout {
    pub enabled: bool,
    #[serde(flatten)]
    pub fmt: LoggingFmt,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingFmt {
    pub style: LoggingFmtStyle,
    pub colors: bool,
    pub show_thread_id: bool,
    pub show_source: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggingFileRotation {
    #[default]
    Never,
    Hourly,
    Daily,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggingFmtStyle {
    Compact,
    Full,
    Json,
    Pretty,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Http {
    pub address: String,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Relay {
    // Program and arguments run to apply the relay settings.
    pub reconfigure_command: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Switch {
    // JSON snapshot of the switch devices and their ports.
    pub state_path: String,
    // Front-panel port names, keyed by port number.
    pub port_names: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Interfaces {
    // Name prefixes of interfaces that can't carry relayed traffic.
    pub pseudo_prefixes: Vec<String>,
}

// ===== impl Config =====

impl Config {
    const DFLT_FILEPATH: &'static str = "/etc/webguid.toml";

    // Reads the configuration file, falling back to the defaults when the
    // file can't be read.
    pub(crate) fn load(
        config_file: Option<&str>,
    ) -> Result<Config, toml::de::Error> {
        let config_file = config_file.unwrap_or(Config::DFLT_FILEPATH);

        match std::fs::read_to_string(config_file) {
            Ok(config_str) => toml::from_str(&config_str),
            Err(err) => {
                eprintln!("Failed to load configuration file: {err}");
                eprintln!("Falling back to default configuration...");
                Ok(Config::default())
            }
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            database_path: "/var/db/webgui/config.db".to_owned(),
            config_seed: None,
            logging: Default::default(),
            http: Default::default(),
            relay: Default::default(),
            switch: Default::default(),
            interfaces: Default::default(),
        }
    }
}

// ===== impl LoggingJournald =====

impl Default for LoggingJournald {
    fn default() -> LoggingJournald {
        LoggingJournald { enabled: false }
    }
}

// ===== impl LoggingFile =====

impl Default for LoggingFile {
    fn default() -> LoggingFile {
        LoggingFile {
            enabled: true,
            dir: "/var/log".to_owned(),
            name: "webguid.log".to_owned(),
            rotation: Default::default(),
            fmt: Default::default(),
        }
    }
}

// ===== impl LoggingStdout =====

impl Default for LoggingStdout {
    fn default() -> LoggingStdout {
        LoggingStdout {
            enabled: false,
            fmt: Default::default(),
        }
    }
}

// ===== impl LoggingFmt =====

impl Default for LoggingFmt {
    fn default() -> LoggingFmt {
        LoggingFmt {
            style: LoggingFmtStyle::Full,
            colors: false,
            show_thread_id: false,
            show_source: false,
        }
    }
}

// ===== impl Http =====

impl Default for Http {
    fn default() -> Http {
        Http {
            address: "[::]:8080".to_owned(),
        }
    }
}

// ===== impl Relay =====

impl Default for Relay {
    fn default() -> Relay {
        Relay {
            reconfigure_command: vec![
                "/usr/sbin/service".to_owned(),
                "dhcrelay6".to_owned(),
                "restart".to_owned(),
            ],
        }
    }
}

// ===== impl Switch =====

impl Default for Switch {
    fn default() -> Switch {
        Switch {
            state_path: "/var/run/webgui/switch.json".to_owned(),
            port_names: Default::default(),
        }
    }
}

// ===== impl Interfaces =====

impl Default for Interfaces {
    fn default() -> Interfaces {
        let prefixes = [
            "enc", "gif", "gre", "ipsec", "l2tp", "lo", "ovpnc", "ovpns",
            "pflog", "pfsync", "ppp", "pptp", "tun", "wg",
        ];
        Interfaces {
            pseudo_prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
        }
    }
}
