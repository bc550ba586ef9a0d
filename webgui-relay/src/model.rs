//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use itertools::Itertools;

// CARP status VIP value meaning "don't track any VIP".
pub const CARP_VIP_NONE: &str = "none";

// Configuration store paths.
pub mod path {
    pub const ENABLE: &str = "dhcrelay6/enable";
    pub const INTERFACE: &str = "dhcrelay6/interface";
    pub const AGENT_OPTION: &str = "dhcrelay6/agentoption";
    pub const SERVER: &str = "dhcrelay6/server";
    pub const CARP_STATUS_VIP: &str = "dhcrelay6/carpstatusvip";
    pub const DHCPDV6: &str = "dhcpdv6";
}

// Form field names.
pub mod field {
    pub const ENABLE: &str = "enable";
    pub const INTERFACE: &str = "interface";
    pub const AGENT_OPTION: &str = "agentoption";
    pub const SERVER: &str = "server";
    pub const CARP_STATUS_VIP: &str = "carpstatusvip";
}

// DHCPv6 relay settings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RelayCfg {
    pub enabled: bool,
    // Interfaces the relay listens on, without duplicates.
    pub interfaces: Vec<String>,
    // Append the circuit ID and agent ID to relayed requests.
    pub agent_option: bool,
    // Destination servers.
    pub servers: Vec<String>,
    // VIP whose CARP status starts and stops the relay.
    pub carp_status_vip: String,
}

// Relay settings as submitted through the form, before validation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RelaySubmission {
    pub enable: bool,
    pub interfaces: Vec<String>,
    pub agent_option: bool,
    // Destination server groups, one value per group. `None` when the form
    // carried no server field at all.
    pub servers: Option<Vec<String>>,
    pub carp_status_vip: Option<String>,
}

// Relay settings that passed validation and can be persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidatedRelay(RelayCfg);

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldError {
    Required {
        field: &'static str,
        label: &'static str,
    },
    InvalidServer(String),
    NoServers,
}

// Result of persisting and applying validated settings.
//
// A reconfigure failure doesn't undo the save: `persisted` can be true while
// `applied` is false.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ApplyOutcome {
    pub persisted: bool,
    pub applied: bool,
    // Status returned by the relay service, if it was called.
    pub status: Option<i32>,
    pub apply_error: Option<String>,
}

// ===== impl RelayCfg =====

impl RelayCfg {
    // Encodes the settings as the fields the relay form would submit.
    pub fn to_form(&self) -> Vec<(String, String)> {
        let mut form = vec![];
        if self.enabled {
            form.push((field::ENABLE.to_owned(), "yes".to_owned()));
        }
        for ifname in &self.interfaces {
            form.push((format!("{}[]", field::INTERFACE), ifname.clone()));
        }
        if self.agent_option {
            form.push((field::AGENT_OPTION.to_owned(), "yes".to_owned()));
        }
        if self.servers.is_empty() {
            form.push((format!("{}[0][]", field::SERVER), String::new()));
        }
        for (i, server) in self.servers.iter().enumerate() {
            form.push((format!("{}[{i}][]", field::SERVER), server.clone()));
        }
        form.push((
            field::CARP_STATUS_VIP.to_owned(),
            self.carp_status_vip.clone(),
        ));
        form
    }

    // Comma-joined interface list, as stored.
    pub fn interface_list(&self) -> String {
        self.interfaces.iter().join(",")
    }

    // Comma-joined server list, as stored.
    pub fn server_list(&self) -> String {
        self.servers.iter().join(",")
    }
}

impl Default for RelayCfg {
    fn default() -> RelayCfg {
        RelayCfg {
            enabled: false,
            interfaces: vec![],
            agent_option: false,
            servers: vec![],
            carp_status_vip: CARP_VIP_NONE.to_owned(),
        }
    }
}

// ===== impl RelaySubmission =====

impl RelaySubmission {
    // Parses the URL-encoded relay form.
    //
    // Repeated keys are kept in submission order. Destination servers may be
    // posted as `server`, `server[]` or grouped as `server[N][]`, in which
    // case only the first value of every group counts.
    pub fn from_form(form: &[(String, String)]) -> RelaySubmission {
        let mut submission = RelaySubmission::default();
        let mut groups: Vec<(Option<usize>, String)> = vec![];
        let mut servers_seen = false;

        for (key, value) in form {
            let (name, rest) = match key.find('[') {
                Some(pos) => key.split_at(pos),
                None => (key.as_str(), ""),
            };
            match name {
                field::ENABLE => submission.enable = form_bool(value),
                field::AGENT_OPTION => submission.agent_option = form_bool(value),
                field::INTERFACE => {
                    if !value.is_empty()
                        && !submission.interfaces.contains(value)
                    {
                        submission.interfaces.push(value.clone());
                    }
                }
                field::SERVER => {
                    servers_seen = true;
                    match server_group(rest) {
                        Some(index) => {
                            if !groups.iter().any(|(i, _)| *i == Some(index)) {
                                groups.push((Some(index), value.clone()));
                            }
                        }
                        None => groups.push((None, value.clone())),
                    }
                }
                field::CARP_STATUS_VIP => {
                    submission.carp_status_vip = Some(value.clone());
                }
                _ => (),
            }
        }

        if servers_seen {
            submission.servers = Some(
                groups
                    .into_iter()
                    .map(|(_, value)| value.trim().to_owned())
                    .collect(),
            );
        }
        submission
    }

    // Non-empty destination servers, in submission order.
    pub fn server_entries(&self) -> impl Iterator<Item = &str> {
        self.servers
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|server| !server.is_empty())
    }

    // Settings to show when the submission is displayed back to the user.
    pub fn to_config(&self) -> RelayCfg {
        RelayCfg {
            enabled: self.enable,
            interfaces: self.interfaces.clone(),
            agent_option: self.agent_option,
            servers: self.server_entries().map(str::to_owned).collect(),
            carp_status_vip: self
                .carp_status_vip
                .clone()
                .filter(|vip| !vip.is_empty())
                .unwrap_or_else(|| CARP_VIP_NONE.to_owned()),
        }
    }
}

// ===== impl ValidatedRelay =====

impl ValidatedRelay {
    pub(crate) fn new(relay: RelayCfg) -> ValidatedRelay {
        ValidatedRelay(relay)
    }

    pub fn into_config(self) -> RelayCfg {
        self.0
    }
}

// ===== impl FieldError =====

impl FieldError {
    // Form field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Required { field, .. } => field,
            FieldError::InvalidServer(..) | FieldError::NoServers => {
                field::SERVER
            }
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Required { label, .. } => {
                write!(f, "The field '{label}' is required.")
            }
            FieldError::InvalidServer(server) => {
                write!(
                    f,
                    "Destination Server IP address {server} is not a valid IPv6 address."
                )
            }
            FieldError::NoServers => {
                write!(
                    f,
                    "At least one Destination Server IP address must be specified."
                )
            }
        }
    }
}

impl std::error::Error for FieldError {}

// ===== impl ApplyOutcome =====

impl ApplyOutcome {
    pub fn success(&self) -> bool {
        self.persisted && self.applied
    }
}

// ===== helper functions =====

// Checkbox and flag fields count as set unless empty or "0".
fn form_bool(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

// Extracts the group index from the bracketed suffix of a server field
// name: "[2][]" and "[2][0]" belong to group 2, "" and "[]" to none.
fn server_group(suffix: &str) -> Option<usize> {
    let inner = suffix.strip_prefix('[')?;
    let close = inner.find(']')?;
    inner[..close].parse().ok()
}
